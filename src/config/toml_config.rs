use crate::adapters::sink::SinkKind;
use crate::utils::error::{PlugError, Result};
use crate::utils::validation::{validate_tool_list, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Plugin settings read from TOML. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlugConfig {
    pub dependencies: DependencyConfig,
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyConfig {
    /// Checked after `git`, which is always required.
    pub required: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub sink: SinkKind,
}

impl PlugConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlugError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn required_tools(&self) -> &[String] {
        &self.dependencies.required
    }
}

impl Validate for PlugConfig {
    fn validate(&self) -> Result<()> {
        validate_tool_list("dependencies.required", &self.dependencies.required)
    }
}
