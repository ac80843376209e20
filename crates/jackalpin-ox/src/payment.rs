use serde::{Deserialize, Serialize};

/// Response from creating a checkout session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSessionResponse {
    /// Checkout session id.
    pub id: String,
}

/// Response from fetching the billing portal URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillingPortalResponse {
    /// Customer portal URL.
    pub url: String,
}
