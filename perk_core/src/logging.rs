//! Logging infrastructure for Perk.
//!
//! Logs go to stderr so that report output on stdout stays machine-readable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with a specific default level
///
/// # Arguments
/// * `default_level` - Default log level (debug, info, warn, error)
///
/// This can still be overridden by RUST_LOG environment variable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Run `f` under a temporary stderr subscriber.
///
/// For work that happens before the configured level is known, such as
/// loading the config file itself. Uses `RUST_LOG` if set, `warn` otherwise.
pub fn with_bootstrap<T>(f: impl FnOnce() -> T) -> T {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_logs_under_debug_subscriber() {
        init_test();
        let profile = crate::PersonProfile {
            age: 60,
            weight_kg: 90.0,
            height_cm: 170.0,
            sex: crate::Sex::Female,
            activity_level: crate::ActivityLevel::Sedentary,
            tolerance: crate::Tolerance::Low,
            measured_bp: None,
            measured_hr: None,
        };
        let result = crate::engine::calculate(&profile).unwrap();
        assert!(result.estimated_bp().is_some());
    }

    #[test]
    fn test_bootstrap_returns_closure_value() {
        let config = with_bootstrap(crate::Config::default);
        assert_eq!(config.logging.level, "warn");
    }
}
