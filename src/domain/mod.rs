// Domain layer: descriptors, diagnostics and the ports the plugin talks through.

pub mod model;
pub mod ports;
