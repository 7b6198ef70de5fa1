//! Configuration management with `.env` and environment variable support.

mod base;
mod constants;
mod env_file;
mod error;

pub use base::{config, BaseConfig, CONFIG};
pub use constants::{ENV, GEMINI_API_KEY_VAR, PORT, SERVER_URL};
pub use env_file::{load_env_file, load_env_file_from};
pub use error::ConfigError;
