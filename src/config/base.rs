//! Process configuration for the calculator backend.

use super::constants::{ENV, GEMINI_API_KEY_VAR, PORT, SERVER_URL};
use super::env_file::load_env_file;
use super::error::ConfigError;
use std::env::VarError;
use std::fmt;
use std::sync::LazyLock;
use tracing::warn;

/// Process-wide configuration, resolved on first access.
///
/// The `.env` file is loaded before the values are read. Later changes to the
/// environment are not observed.
pub static CONFIG: LazyLock<BaseConfig> = LazyLock::new(BaseConfig::load);

/// Shorthand for `&*CONFIG`.
pub fn config() -> &'static BaseConfig {
    &CONFIG
}

/// Configuration read by the backend at startup.
///
/// | Value | Source |
/// |-------|--------|
/// | `host` | always `0.0.0.0` |
/// | `port` | always `5000` |
/// | `env` | always `prod` |
/// | `gemini_api_key` | `GEMINI_API_KEY`, absent when unset |
///
/// # Example
///
/// ```rust
/// use calc_core::BaseConfig;
///
/// let config = BaseConfig::from_env();
/// assert_eq!(config.socket_addr(), "0.0.0.0:5000");
///
/// if !config.has_gemini_api_key() {
///     println!("GEMINI_API_KEY is not set");
/// }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BaseConfig {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Deployment environment name
    pub env: String,
    /// Gemini API key, if configured
    pub gemini_api_key: Option<String>,
}

impl BaseConfig {
    /// Load the `.env` file, then read the configuration.
    pub fn load() -> Self {
        load_env_file();
        Self::from_env()
    }

    /// Read the configuration from the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Read the configuration through `lookup` instead of the process
    /// environment.
    ///
    /// A variable set to the empty string counts as set. A value that is not
    /// valid unicode is treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let gemini_api_key = match lookup(GEMINI_API_KEY_VAR) {
            Ok(key) => Some(key),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(var = GEMINI_API_KEY_VAR, "Ignoring non-unicode value");
                None
            }
        };

        Self {
            host: SERVER_URL.to_string(),
            port: PORT,
            env: ENV.to_string(),
            gemini_api_key,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref()
    }

    /// Check if a Gemini API key is configured.
    pub fn has_gemini_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    /// Get the Gemini API key, or an error for callers that cannot run
    /// without it.
    pub fn require_gemini_api_key(&self) -> Result<&str, ConfigError> {
        self.gemini_api_key().ok_or(ConfigError::MissingVar {
            name: GEMINI_API_KEY_VAR,
        })
    }

    pub fn is_production(&self) -> bool {
        self.env == ENV
    }

    /// Get the socket address for binding.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for BaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("env", &self.env)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
