pub mod host;
pub mod plugin;

pub use crate::domain::model::{Diagnostic, HookKind, ModelDescriptor, ProjectDescriptor};
pub use crate::domain::ports::{DiagnosticSink, Generator, Utilities};
pub use crate::utils::error::Result;
