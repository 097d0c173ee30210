//! Structured logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::error::TelemetryError;

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `default_filter`
/// (for example `"info"` or `"dexgraph_aggregator=debug"`).
///
/// # Errors
///
/// Returns [`TelemetryError`] if a global subscriber is already installed.
pub fn init_tracing(format: LogFormat, default_filter: &str) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| TelemetryError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_reports_error() {
        // Whichever test installs first wins; the next attempt must fail cleanly.
        let _first = init_tracing(LogFormat::Text, "warn");
        assert!(init_tracing(LogFormat::Json, "warn").is_err());
    }
}
