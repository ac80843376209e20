use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure classes surfaced by the dispatch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credentials missing or rejected (HTTP 401, or the pre-flight check).
    Unauthorized,
    /// The requested resource does not exist (HTTP 404).
    NotFound,
    /// The request was malformed (HTTP 400).
    BadRequest,
    /// The service failed (HTTP 5xx).
    Server,
    /// Any other non-success status.
    Api,
    /// The configured deadline elapsed before a response arrived.
    Timeout,
    /// The transport failed before a status was received.
    Transport,
    /// A JSON value could not be converted to or from its typed shape.
    Decode,
}

impl ErrorKind {
    /// Message used when the server supplies none.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "Invalid or missing API key",
            ErrorKind::NotFound => "Resource not found",
            ErrorKind::BadRequest => "Bad request",
            ErrorKind::Server => "Server error",
            ErrorKind::Api => "API error",
            ErrorKind::Timeout => "Request timed out",
            ErrorKind::Transport => "Request failed",
            ErrorKind::Decode => "Unexpected response from API",
        }
    }
}

/// Error returned by every dispatch call.
///
/// One shape for the whole taxonomy: the [`ErrorKind`] discriminant says
/// what happened, `status_code` is present whenever the server produced a
/// status, and `response` carries the decoded payload for caller
/// inspection.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PinRequestError {
    /// Failure class.
    pub kind: ErrorKind,
    /// Human-readable description, preferring the server's own wording.
    pub message: String,
    /// HTTP status code, when the failure maps to one.
    pub status_code: Option<u16>,
    /// Decoded response payload, when one was received.
    pub response: Option<Value>,
}

impl PinRequestError {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            response: None,
        }
    }

    /// Create an error of the given kind with its default message.
    #[must_use]
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }

    /// Attach the HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }

    /// Attach the decoded response payload.
    #[must_use]
    pub fn with_response(mut self, response: Value) -> Self {
        self.response = Some(response);
        self
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// The dispatcher itself never retries; classification is surfaced
    /// verbatim and the caller decides.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Server | ErrorKind::Timeout | ErrorKind::Transport
        )
    }
}

/// Decode a response body and classify non-success statuses.
///
/// Status 204 yields an empty object without touching the body. Any other
/// body is decoded as JSON, falling back to wrapping the raw text as
/// `{"message": <text>}`. Success statuses return the decoded value
/// unmodified; everything else maps to an error kind by status code,
/// carrying the exact code and the decoded payload.
pub fn decode_response(status: StatusCode, bytes: &Bytes) -> Result<Value, PinRequestError> {
    if status == StatusCode::NO_CONTENT {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let payload = match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => value,
        Err(_) => {
            let text = String::from_utf8_lossy(bytes).into_owned();
            serde_json::json!({ "message": text })
        }
    };

    if status.is_success() {
        return Ok(payload);
    }

    let message = payload
        .as_object()
        .and_then(|map| map.get("message"))
        .and_then(Value::as_str)
        .map_or_else(
            || {
                format!(
                    "HTTP Error {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            },
            str::to_owned,
        );

    let kind = match status.as_u16() {
        401 => ErrorKind::Unauthorized,
        404 => ErrorKind::NotFound,
        400 => ErrorKind::BadRequest,
        500..=599 => ErrorKind::Server,
        _ => ErrorKind::Api,
    };

    Err(PinRequestError::new(kind, message)
        .with_status(status.as_u16())
        .with_response(payload))
}
