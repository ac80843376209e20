use serde::{Deserialize, Serialize};

/// An API key as returned on creation.
///
/// The secret `key` value is only present in this response; listings
/// return [`KeyInfo`] without it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Key {
    /// Name the key was created under.
    pub name: String,
    /// The secret bearer value.
    pub key: String,
}

/// Metadata for an existing API key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyInfo {
    /// Name the key was created under.
    pub name: String,
    /// Creation timestamp, as reported by the service.
    pub created_at: String,
}

/// A page of API keys together with the account-wide total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyListResponse {
    /// Keys on the requested page.
    pub keys: Vec<KeyInfo>,
    /// Total number of keys, independent of page length.
    pub count: u64,
}

/// Response from verifying an API key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestKeyResponse {
    /// Confirmation message.
    pub message: String,
}
