//! Tracing setup

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Level used when the configured one is not a valid filter directive
const FALLBACK_LEVEL: &str = "info";

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Parse `logging.format`, case-insensitively. `None` for unknown values.
    pub fn parse(format: &str) -> Option<Self> {
        match format.trim().to_lowercase().as_str() {
            "text" | "" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Build the filter: `RUST_LOG` first, then the configured level.
///
/// Returns the parse error message when the configured level is unusable and
/// the fallback level was substituted.
fn build_filter(level: &str) -> (EnvFilter, Option<String>) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, None);
    }
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e.to_string())),
    }
}

/// Initialize tracing (logging) from the logging config.
///
/// An invalid `level` falls back to `info` and an unknown `format` to text;
/// both are reported as warnings once the subscriber is installed. Call this
/// once at process startup.
pub fn init_tracing(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let (env_filter, level_error) = build_filter(&config.level);
    let format = LogFormat::parse(&config.format);

    let registry = tracing_subscriber::registry().with(env_filter);
    match format.unwrap_or(LogFormat::Text) {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    if let Some(e) = level_error {
        warn!(
            "Invalid log level {:?} ({}), using {}",
            config.level, e, FALLBACK_LEVEL
        );
    }
    if format.is_none() {
        warn!("Unknown log format {:?}, using text", config.format);
    }
}
