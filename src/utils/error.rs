use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlugError {
    #[error("Missing required dependency: {tool}")]
    MissingDependency { tool: String },

    #[error("Problem generating the project: {source}")]
    ProjectGenerationFailed {
        #[source]
        source: anyhow::Error,
    },

    #[error("Problem generating the model: {source}")]
    ModelGenerationFailed {
        #[source]
        source: anyhow::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Dependency,
    Generation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PlugError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlugError::MissingDependency { .. } => ErrorCategory::Dependency,
            PlugError::ProjectGenerationFailed { .. } | PlugError::ModelGenerationFailed { .. } => {
                ErrorCategory::Generation
            }
            PlugError::ConfigError { .. }
            | PlugError::InvalidConfigValueError { .. }
            | PlugError::TomlError(_) => ErrorCategory::Configuration,
            PlugError::IoError(_) | PlugError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // a failed hook can be retried or skipped by the host
            ErrorCategory::Generation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Dependency | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Generation
    }

    /// The underlying generation failure, if this error wraps one.
    pub fn generation_cause(&self) -> Option<&anyhow::Error> {
        match self {
            PlugError::ProjectGenerationFailed { source }
            | PlugError::ModelGenerationFailed { source } => Some(source),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlugError::MissingDependency { tool } => {
                format!("The plugin needs '{}' but it was not found", tool)
            }
            PlugError::ProjectGenerationFailed { source } => {
                format!("Project generation failed: {}", source)
            }
            PlugError::ModelGenerationFailed { source } => {
                format!("Model generation failed: {}", source)
            }
            PlugError::ConfigError { message } => format!("Configuration problem: {}", message),
            PlugError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PlugError::MissingDependency { tool } => {
                format!("Install '{}' and make sure it is on your PATH", tool)
            }
            PlugError::ProjectGenerationFailed { .. } | PlugError::ModelGenerationFailed { .. } => {
                "Check the diagnostic output above, then retry the operation".to_string()
            }
            PlugError::TomlError(_) => "Make sure the config file is valid TOML".to_string(),
            PlugError::ConfigError { .. } | PlugError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
            PlugError::IoError(_) => "Check file paths and permissions".to_string(),
            PlugError::SerializationError(_) => "Make sure the descriptor is valid JSON".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlugError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_generation_error_keeps_cause() {
        let err = PlugError::ProjectGenerationFailed {
            source: anyhow::anyhow!("template missing"),
        };
        assert_eq!(
            err.to_string(),
            "Problem generating the project: template missing"
        );
        assert_eq!(err.source().unwrap().to_string(), "template missing");
        assert!(err.is_retryable());
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_missing_dependency_is_fatal() {
        let err = PlugError::MissingDependency {
            tool: "git".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Dependency);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_retryable());
        assert!(err.generation_cause().is_none());
        assert!(err.recovery_suggestion().contains("git"));
    }
}
