//! Structured logging initialisation.
//!
//! Output is either human-readable lines (development) or newline-delimited
//! JSON (production, log aggregation). The filter level can be overridden at
//! runtime via the `RUST_LOG` environment variable; when it is not set, the
//! configured level string is used (e.g. `"info"`, `"debug,ur_processor=trace"`).

use crate::config::ChainConfig;
use crate::ProcessorError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
}

impl LogFormat {
    /// Parse the `log_format` config string.
    pub fn from_config_str(s: &str) -> Result<Self, ProcessorError> {
        match s {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(ProcessorError::Config(format!(
                "unknown log format: {other}"
            ))),
        }
    }
}

/// Initialise the global tracing subscriber from the chain config.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (i.e. this function
/// was called twice in the same process).
pub fn init_from_config(config: &ChainConfig) -> Result<(), ProcessorError> {
    let format = LogFormat::from_config_str(&config.log_format)?;
    init_logging(format, &config.log_level);
    Ok(())
}

/// Initialise the global tracing subscriber with an explicit format and level.
pub fn init_logging(format: LogFormat, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Human => registry.with(fmt::layer().with_target(true)).init(),
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).init(),
    }
}
