use crate::domain::model::{ModelDescriptor, ProjectDescriptor};
use crate::utils::error::{PlugError, Result};
use crate::utils::validation::{validate_tool_list, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gen-plug")]
#[command(about = "Drive the generator plugin the way a host would")]
pub struct CliConfig {
    /// Path to a TOML plugin configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Treat these tools as installed instead of probing PATH
    #[arg(long = "assume-tool", value_name = "TOOL")]
    pub assume_tools: Vec<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Only run the dependency checks
    Check,
    /// Call the project initialization hook
    InitProject(DescriptorArgs),
    /// Call the model initialization hook
    InitModel(DescriptorArgs),
}

#[derive(Debug, Clone, Args)]
pub struct DescriptorArgs {
    /// Descriptor as inline JSON
    #[arg(long, conflicts_with = "name")]
    pub descriptor: Option<String>,

    /// Shorthand for `--descriptor '{"name": NAME}'`
    #[arg(long)]
    pub name: Option<String>,
}

impl DescriptorArgs {
    fn to_value(&self) -> Result<serde_json::Value> {
        match (&self.descriptor, &self.name) {
            (Some(json), _) => Ok(serde_json::from_str(json)?),
            (None, Some(name)) => Ok(serde_json::json!({ "name": name })),
            (None, None) => Ok(serde_json::json!({})),
        }
    }

    pub fn project(&self) -> Result<ProjectDescriptor> {
        self.to_value().map(ProjectDescriptor::new)
    }

    pub fn model(&self) -> Result<ModelDescriptor> {
        self.to_value().map(ModelDescriptor::new)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_tool_list("assume-tool", &self.assume_tools)?;

        if let Some(path) = &self.config {
            if !path.is_file() {
                return Err(PlugError::ConfigError {
                    message: format!("config file '{}' does not exist", path.display()),
                });
            }
        }
        Ok(())
    }
}
