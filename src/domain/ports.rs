use crate::domain::model::{Diagnostic, ModelDescriptor, ProjectDescriptor};
use crate::utils::error::Result;

/// Capability handle supplied by the host.
pub trait Utilities {
    /// Fails with `PlugError::MissingDependency` when `tool` is unavailable.
    fn test_dependency(&self, tool: &str) -> Result<()>;
}

/// The work performed behind each lifecycle hook.
///
/// Both methods default to doing nothing, so a plugin only overrides the hook
/// it actually generates content for.
pub trait Generator {
    fn generate_project(&self, _project: &ProjectDescriptor) -> anyhow::Result<()> {
        Ok(())
    }

    fn generate_model(&self, _model: &ModelDescriptor) -> anyhow::Result<()> {
        Ok(())
    }
}

pub trait DiagnosticSink {
    fn emit(&self, diagnostic: &Diagnostic);
}

impl<T: Utilities + ?Sized> Utilities for &T {
    fn test_dependency(&self, tool: &str) -> Result<()> {
        (**self).test_dependency(tool)
    }
}

impl<T: Utilities + ?Sized> Utilities for Box<T> {
    fn test_dependency(&self, tool: &str) -> Result<()> {
        (**self).test_dependency(tool)
    }
}
