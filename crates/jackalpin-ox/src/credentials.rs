//! Credential resolution helpers.
//!
//! The client itself only accepts an explicit token; callers resolve one
//! here (or from their own credential store) and pass it in.

/// Environment variable holding the account's API key.
pub const API_KEY_ENV: &str = "JACKALPIN_API_KEY";

/// Read the API key from [`API_KEY_ENV`].
pub fn api_key_from_env() -> Result<String, std::env::VarError> {
    std::env::var(API_KEY_ENV)
}
