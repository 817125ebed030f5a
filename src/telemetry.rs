//! Tracing subscriber initialisation.
//!
//! `RUST_LOG` wins over the configured filter when it is set and parses.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("Tracing already initialised: {0}")]
    Init(#[from] TryInitError),
}

/// Installs the global subscriber, writing to stderr.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(&config.filter, std::env::var(EnvFilter::DEFAULT_ENV).ok())?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }
    Ok(())
}

fn build_filter(configured: &str, env_override: Option<String>) -> Result<EnvFilter, ParseError> {
    if let Some(directives) = env_override {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return Ok(filter);
        }
    }
    EnvFilter::try_new(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_used_without_override() {
        let filter = build_filter("survey_core=debug", None).unwrap();
        assert_eq!(filter.to_string().to_lowercase(), "survey_core=debug");
    }

    #[test]
    fn env_override_wins() {
        let filter = build_filter("info", Some("warn".to_string())).unwrap();
        assert_eq!(filter.to_string().to_lowercase(), "warn");
    }

    #[test]
    fn unparseable_override_falls_back() {
        let filter = build_filter("info", Some("survey_core=loud".to_string())).unwrap();
        assert_eq!(filter.to_string().to_lowercase(), "info");
    }

    #[test]
    fn invalid_configured_filter_is_an_error() {
        assert!(build_filter("survey_core=loud", None).is_err());
    }
}
