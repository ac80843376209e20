#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Shared HTTP client abstractions for pinning-service clients
//!
//! This crate provides the request dispatch layer used by the pin-ox
//! client crates: endpoint descriptions, URL and header assembly,
//! JSON and multipart dispatch, response decoding, and a single
//! classified error type.

pub mod error;
pub mod request_builder;

pub use error::{ErrorKind, PinRequestError, decode_response};
pub use request_builder::{Endpoint, HttpMethod, MultipartForm, RequestBuilder, RequestConfig};
