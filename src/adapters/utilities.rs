use crate::domain::ports::Utilities;
use crate::utils::error::{PlugError, Result};
use std::collections::BTreeSet;

/// Looks tools up on `PATH`. Every call probes again, nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUtilities;

impl SystemUtilities {
    pub fn new() -> Self {
        Self
    }
}

impl Utilities for SystemUtilities {
    fn test_dependency(&self, tool: &str) -> Result<()> {
        match which::which(tool) {
            Ok(path) => {
                tracing::debug!("Found dependency '{}' at {}", tool, path.display());
                Ok(())
            }
            Err(e) => {
                tracing::debug!("Dependency '{}' not found: {}", tool, e);
                Err(PlugError::MissingDependency {
                    tool: tool.to_string(),
                })
            }
        }
    }
}

/// A fixed set of tools reported as installed.
#[derive(Debug, Clone, Default)]
pub struct StaticUtilities {
    available: BTreeSet<String>,
}

impl StaticUtilities {
    pub fn new<I, S>(tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: tools.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.available.insert(tool.into());
        self
    }
}

impl Utilities for StaticUtilities {
    fn test_dependency(&self, tool: &str) -> Result<()> {
        if self.available.contains(tool) {
            Ok(())
        } else {
            Err(PlugError::MissingDependency {
                tool: tool.to_string(),
            })
        }
    }
}
