//! Fixed configuration values and recognized variable names.

/// Bind address. The hosting platform only routes traffic to processes
/// listening on all interfaces.
pub const SERVER_URL: &str = "0.0.0.0";

/// Internal listen port. The platform maps the public port onto it.
pub const PORT: u16 = 5000;

/// Deployment environment name.
pub const ENV: &str = "prod";

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
