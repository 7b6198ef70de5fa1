//! Calc Core - Startup configuration for the calculator backend.
//!
//! This crate provides the values the backend reads once at startup:
//!
//! - **config**: `.env` loading and the process-wide configuration
//! - **bootstrap**: Tracing initialization utilities
//!
//! # Features
//!
//! - `config` - Configuration loading (enabled by default)
//! - `bootstrap` - Tracing setup (enabled by default)
//!
//! # Example
//!
//! ```rust,no_run
//! use calc_core::{config, init_tracing, PORT, SERVER_URL};
//!
//! init_tracing("calc_core=debug,info");
//! let config = config();
//! assert_eq!(config.socket_addr(), format!("{SERVER_URL}:{PORT}"));
//!
//! if let Some(key) = config.gemini_api_key() {
//!     // hand the key to the AI client
//!     let _ = key;
//! }
//! ```

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
#[cfg(feature = "config")]
pub use config::{
    config, load_env_file, load_env_file_from, BaseConfig, ConfigError, CONFIG, ENV,
    GEMINI_API_KEY_VAR, PORT, SERVER_URL,
};

#[cfg(feature = "bootstrap")]
pub use bootstrap::{init, init_tracing};
