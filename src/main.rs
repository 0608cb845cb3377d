use clap::Parser;
use gen_plug::config::cli::Command;
use gen_plug::utils::error::ErrorSeverity;
use gen_plug::utils::logger::{self, LogFormat};
use gen_plug::utils::validation::Validate;
use gen_plug::{
    CliConfig, HostRequest, PlugConfig, PlugError, PluginHost, StaticUtilities, SystemUtilities,
    Utilities,
};

fn main() {
    let config = CliConfig::parse();

    let format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);

    tracing::info!("Starting gen-plug host");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,   // hook failed, retryable
            ErrorSeverity::High => 1,     // bad configuration
            ErrorSeverity::Critical => 3, // missing tool or system error
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<(), PlugError> {
    config.validate()?;

    let plug_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            PlugConfig::from_file(path)?
        }
        None => PlugConfig::default(),
    };

    let utils: Box<dyn Utilities> = if config.assume_tools.is_empty() {
        Box::new(SystemUtilities::new())
    } else {
        tracing::info!("Assuming installed tools: {}", config.assume_tools.join(", "));
        Box::new(StaticUtilities::new(config.assume_tools.iter().cloned()))
    };

    let host = PluginHost::load(utils, &plug_config)?;

    let request = match &config.command {
        Command::Check => {
            println!("✅ All required tools are available");
            return Ok(());
        }
        Command::InitProject(args) => HostRequest::InitProject(args.project()?),
        Command::InitModel(args) => HostRequest::InitModel(args.model()?),
    };

    host.dispatch(&request)?;
    println!("✅ {} completed", request.hook());
    Ok(())
}
