//! Configuration errors.

use std::fmt;
use std::path::PathBuf;

/// Error returned by the fallible configuration helpers.
///
/// Resolving the configuration itself never fails; these errors come from
/// explicit requests such as [`load_env_file_from`](super::load_env_file_from)
/// or [`BaseConfig::require_gemini_api_key`](super::BaseConfig::require_gemini_api_key).
#[derive(Debug)]
pub enum ConfigError {
    /// A required variable is not set.
    MissingVar { name: &'static str },
    /// An env file exists but could not be read or parsed.
    EnvFile {
        path: PathBuf,
        source: dotenvy::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVar { name } => write!(f, "environment variable {name} is not set"),
            Self::EnvFile { path, source } => {
                write!(f, "failed to load env file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingVar { .. } => None,
            Self::EnvFile { source, .. } => Some(source),
        }
    }
}
