// Re-export the shared error taxonomy from pin-ox-common
pub use pin_ox_common::error::{ErrorKind, PinRequestError, decode_response};

/// Error type used across the Jackal Pin client surface.
pub type JackalPinError = PinRequestError;
