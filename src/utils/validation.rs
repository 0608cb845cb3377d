use crate::utils::error::{PlugError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn tool_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._+-]*$").expect("tool name pattern is valid")
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlugError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Tool names end up in a PATH lookup, so no separators or whitespace.
pub fn validate_tool_name(field_name: &str, tool: &str) -> Result<()> {
    validate_non_empty_string(field_name, tool)?;

    if !tool_name_pattern().is_match(tool) {
        return Err(PlugError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: tool.to_string(),
            reason: "Tool name may only contain letters, digits, '.', '_', '+' and '-'"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_tool_list(field_name: &str, tools: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for tool in tools {
        validate_tool_name(field_name, tool)?;
        if !seen.insert(tool.as_str()) {
            return Err(PlugError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: tool.clone(),
                reason: "Tool listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tool_name() {
        assert!(validate_tool_name("required", "git").is_ok());
        assert!(validate_tool_name("required", "g++").is_ok());
        assert!(validate_tool_name("required", "python3.12").is_ok());
        assert!(validate_tool_name("required", "").is_err());
        assert!(validate_tool_name("required", "   ").is_err());
        assert!(validate_tool_name("required", "bin/git").is_err());
        assert!(validate_tool_name("required", "-git").is_err());
        assert!(validate_tool_name("required", "git lfs").is_err());
    }

    #[test]
    fn test_validate_tool_list_rejects_duplicates() {
        let tools = vec!["git".to_string(), "node".to_string()];
        assert!(validate_tool_list("required", &tools).is_ok());

        let dupes = vec!["git".to_string(), "git".to_string()];
        assert!(validate_tool_list("required", &dupes).is_err());
    }
}
