//! Tracing initialization utilities.

use crate::config::{config, BaseConfig};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the given default filter.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
///
/// # Example
///
/// ```rust
/// use calc_core::init_tracing;
///
/// // Enable debug logging for this crate, info for everything else
/// init_tracing("calc_core=debug,info");
/// ```
///
/// # Filter Syntax
///
/// The filter follows the `tracing_subscriber::EnvFilter` syntax:
/// - `info` - Enable info level for all targets
/// - `my_crate=debug` - Enable debug level for `my_crate`
/// - `my_crate=debug,info` - Debug for `my_crate`, info for everything else
/// - `my_crate::module=trace` - Trace level for a specific module
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .is_ok()
}

/// Initialize tracing, then resolve the process-wide configuration.
///
/// Tracing comes first so that `.env` loading is logged.
pub fn init(default_filter: &str) -> &'static BaseConfig {
    init_tracing(default_filter);

    let config = config();
    info!(
        host = %config.host,
        port = config.port,
        env = %config.env,
        gemini_api_key = config.has_gemini_api_key(),
        "Configuration loaded"
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        // Only one test in this binary installs a global subscriber.
        assert!(init_tracing("calc_core=debug"));
        assert!(!init_tracing("calc_core=debug"));
    }
}
