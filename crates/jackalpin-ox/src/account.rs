use serde::{Deserialize, Serialize};

/// Storage usage for the account.
///
/// The used/allowed ratio is left to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountUsage {
    /// Bytes currently stored.
    pub bytes_used: u64,
    /// Bytes allowed by the subscription.
    pub bytes_allowed: u64,
}

/// Response from fetching the account id hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountIdResponse {
    /// Account id hash.
    pub id: String,
}
