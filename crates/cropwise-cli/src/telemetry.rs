use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a full tracing filter directive.
const LOG_ENV: &str = "CROPWISE_LOG";

#[derive(Debug, thiserror::Error)]
pub enum LogSetupError {
    #[error("invalid log filter '{directive}' (from {origin})")]
    Filter {
        directive: String,
        origin: &'static str,
        #[source]
        source: ParseError,
    },

    #[error("could not install log subscriber: {0}")]
    Install(Box<dyn std::error::Error + Send + Sync>),
}

/// Pick the filter directive: `CROPWISE_LOG` when set, else the configured
/// level. A bad directive is an error rather than a silent fallback.
fn filter(env_directive: Option<&str>, config: &TelemetryConfig) -> Result<EnvFilter, LogSetupError> {
    let (directive, origin) = match env_directive.map(str::trim) {
        Some(d) if !d.is_empty() => (d, LOG_ENV),
        _ => (config.log_level.as_str(), "config"),
    };
    EnvFilter::try_new(directive).map_err(|source| LogSetupError::Filter {
        directive: directive.to_string(),
        origin,
        source,
    })
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for table and JSON output.
pub fn init(config: &TelemetryConfig) -> Result<(), LogSetupError> {
    let env_directive = std::env::var(LOG_ENV).ok();
    let filter = filter(env_directive.as_deref(), config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(LogSetupError::Install)
}
