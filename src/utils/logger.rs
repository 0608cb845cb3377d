use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// For hosts that collect structured logs.
    Json,
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "gen_plug=debug,info"
    } else {
        "gen_plug=info"
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout stays free for results.
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let base = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let output: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Json => base.json().boxed(),
    };

    tracing_subscriber::registry().with(output).with(filter).init();
}
