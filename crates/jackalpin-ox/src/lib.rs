#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Jackal Pin API client for Rust
//!
//! This crate provides a Rust client for the Jackal Pin pinning service,
//! with support for:
//! - File upload, cloning and pinning by content identifier
//! - API key management
//! - Collections (including nested collections)
//! - Account usage and billing
//!
//! # Example
//!
//! ```rust,no_run
//! use jackalpin_ox::JackalPin;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = jackalpin_ox::credentials::api_key_from_env()?;
//!     let client = JackalPin::new(api_key);
//!
//!     let usage = client.get_usage().await?;
//!     println!("{} of {} bytes used", usage.bytes_used, usage.bytes_allowed);
//!
//!     Ok(())
//! }
//! ```

pub mod account;
pub mod client;
pub mod collections;
pub mod credentials;
pub mod error;
pub mod files;
pub mod internal;
pub mod keys;
pub mod params;
pub mod payment;
pub mod queue;

// Re-export main types
pub use account::{AccountIdResponse, AccountUsage};
pub use client::JackalPin;
pub use collections::{
    Collection, CollectionCreateResponse, CollectionDetailResponse, CollectionListResponse,
};
pub use error::{ErrorKind, JackalPinError};
pub use files::{FileDetail, FileListResponse, FileUpload, FileUploadResponse};
pub use keys::{Key, KeyInfo, KeyListResponse, TestKeyResponse};
pub use params::{ListParams, PageParams};
pub use payment::{BillingPortalResponse, CheckoutSessionResponse};
pub use queue::QueueSizeResponse;
