use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project document handed over by the host. Its shape belongs to the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectDescriptor {
    pub data: serde_json::Value,
}

/// Model document handed over by the host. Its shape belongs to the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelDescriptor {
    pub data: serde_json::Value,
}

impl ProjectDescriptor {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }

    pub fn named(name: &str) -> Self {
        Self::new(serde_json::json!({ "name": name }))
    }

    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(|v| v.as_str())
    }
}

impl ModelDescriptor {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }

    pub fn named(name: &str) -> Self {
        Self::new(serde_json::json!({ "name": name }))
    }

    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKind {
    Project,
    Model,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookKind::Project => write!(f, "init_project"),
            HookKind::Model => write!(f, "init_model"),
        }
    }
}

/// Emitted to the diagnostic sink when a hook's generation work fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub hook: HookKind,
    pub summary: String,
    /// Cause chain, followed by the backtrace when one was captured.
    pub detail: String,
    pub occurred_at: DateTime<Utc>,
}

impl Diagnostic {
    pub fn from_error(hook: HookKind, err: &anyhow::Error) -> Self {
        Self {
            hook,
            summary: err.to_string(),
            detail: format!("{:?}", err),
            occurred_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_name() {
        let project = ProjectDescriptor::named("demo");
        assert_eq!(project.name(), Some("demo"));

        let unnamed = ModelDescriptor::new(serde_json::json!({ "fields": [] }));
        assert_eq!(unnamed.name(), None);

        let scalar = ModelDescriptor::new(serde_json::json!(42));
        assert_eq!(scalar.name(), None);
    }

    #[test]
    fn test_descriptor_is_transparent_json() {
        let project: ProjectDescriptor =
            serde_json::from_str(r#"{"name":"demo","lang":"rust"}"#).unwrap();
        assert_eq!(project.name(), Some("demo"));
        assert_eq!(project.data["lang"], "rust");
    }

    #[test]
    fn test_diagnostic_captures_cause_chain() {
        let err = anyhow::anyhow!("disk full").context("writing README");
        let diag = Diagnostic::from_error(HookKind::Project, &err);
        assert_eq!(diag.summary, "writing README");
        assert!(diag.detail.contains("writing README"));
        assert!(diag.detail.contains("disk full"));
        assert_eq!(diag.hook.to_string(), "init_project");
    }
}
