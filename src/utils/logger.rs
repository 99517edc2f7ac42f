use crate::domain::model::LogFormat;
use crate::utils::error::{ProjectError, Result};
use std::io::IsTerminal;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// `RUST_LOG` wins when set; otherwise the crate logs at `level`.
pub fn cli_filter(level: &str, verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "project_init=debug,info".to_string()
    } else {
        format!("project_init={}", level.to_ascii_lowercase())
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Builds the subscriber without installing it, so callers pick the writer.
pub fn build_subscriber<W>(
    filter: EnvFilter,
    format: LogFormat,
    writer: W,
    ansi: bool,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => Box::new(
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.compact()),
        ),
        LogFormat::Json => Box::new(tracing_subscriber::registry().with(filter).with(layer.json())),
    }
}

/// Installs the global subscriber writing to stderr.
pub fn init_cli_logger(level: &str, verbose: bool, format: LogFormat) -> Result<()> {
    let ansi = format == LogFormat::Compact && std::io::stderr().is_terminal();
    let subscriber = build_subscriber(cli_filter(level, verbose), format, std::io::stderr, ansi);

    tracing::subscriber::set_global_default(subscriber).map_err(|e| ProjectError::LoggerError {
        message: e.to_string(),
    })
}
