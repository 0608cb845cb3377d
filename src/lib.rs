pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    MemorySink, SinkKind, StaticUtilities, StderrSink, SystemUtilities, TracingSink, WriterSink,
};
pub use config::PlugConfig;
pub use crate::core::host::{HostRequest, PluginHost, RequestOutcome};
pub use crate::core::plugin::{NoopGenerator, Plug, PlugBuilder, REQUIRED_TOOLS};
pub use domain::model::{Diagnostic, HookKind, ModelDescriptor, ProjectDescriptor};
pub use domain::ports::{DiagnosticSink, Generator, Utilities};
pub use utils::error::{PlugError, Result};
