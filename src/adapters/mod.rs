// Adapters layer: concrete implementations of the domain ports.

pub mod sink;
pub mod utilities;

pub use sink::{write_diagnostic, MemorySink, SinkKind, StderrSink, TracingSink, WriterSink};
pub use utilities::{StaticUtilities, SystemUtilities};
