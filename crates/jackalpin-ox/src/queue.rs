use serde::{Deserialize, Serialize};

/// Current depth of the service's processing queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueSizeResponse {
    /// Number of queued items.
    pub size: u64,
}
