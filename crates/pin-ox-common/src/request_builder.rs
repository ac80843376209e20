use std::time::Duration;

use reqwest::{Method, RequestBuilder as ReqwestRequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{self, ErrorKind, PinRequestError};

/// Timeout applied when the configuration does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Raised before any network activity when an auth-requiring endpoint is
/// called without a configured token.
const MISSING_KEY_MESSAGE: &str = "API key is required for authentication";

/// HTTP method for API endpoints
#[derive(Debug, Clone)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Represents an API endpoint with its configuration
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Path relative to the configured base URL.
    pub path: String,
    /// HTTP verb.
    pub method: HttpMethod,
    /// Query pairs sent verbatim when present.
    pub query_params: Option<Vec<(String, String)>>,
    /// Whether a bearer token must be configured before dispatch.
    pub requires_auth: bool,
}

impl Endpoint {
    /// Create an endpoint that requires authentication.
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
            query_params: None,
            requires_auth: true,
        }
    }

    /// Attach query parameters.
    #[must_use]
    pub fn with_query_params(mut self, params: Vec<(String, String)>) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Mark the endpoint as callable without credentials.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }
}

/// Configuration for request building
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Base URL every endpoint path is resolved against.
    pub base_url: String,
    /// Bearer token attached to every request when present.
    pub bearer_token: Option<String>,
    /// Deadline spanning connection and response, per request.
    pub timeout: Duration,
    /// Optional `user-agent` header value.
    pub user_agent: Option<String>,
}

impl RequestConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `user-agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Generic request builder that handles the service's HTTP patterns
pub struct RequestBuilder {
    /// Underlying HTTP client.
    client: reqwest::Client,
    /// Connection and auth configuration.
    config: RequestConfig,
}

impl RequestBuilder {
    /// Create a builder over the given client and configuration.
    #[must_use]
    pub fn new(client: reqwest::Client, config: RequestConfig) -> Self {
        Self { client, config }
    }

    /// Build a reqwest `RequestBuilder` for the given endpoint.
    ///
    /// Fails without any network activity when the endpoint requires
    /// authentication and no token is configured. The bearer header is
    /// attached whenever a token exists, including on public endpoints.
    pub fn build_request(
        &self,
        endpoint: &Endpoint,
    ) -> Result<ReqwestRequestBuilder, PinRequestError> {
        if endpoint.requires_auth && self.config.bearer_token.is_none() {
            return Err(
                PinRequestError::new(ErrorKind::Unauthorized, MISSING_KEY_MESSAGE)
                    .with_status(401),
            );
        }

        // Trimming both sides keeps resolution idempotent for paths with a
        // leading separator and never discards the base path's tail segment.
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path.trim_start_matches('/')
        );
        let method: Method = endpoint.method.clone().into();

        let mut req = self
            .client
            .request(method, &url)
            .timeout(self.config.timeout);

        if let Some(ref params) = endpoint.query_params {
            req = req.query(params);
        }

        if let Some(ref token) = self.config.bearer_token {
            req = req.bearer_auth(token);
        }

        if let Some(ref user_agent) = self.config.user_agent {
            req = req.header("user-agent", user_agent);
        }

        Ok(req)
    }

    /// Execute a request without body and return the deserialized response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, PinRequestError> {
        let req = self.build_request(endpoint)?;
        let value = self.execute(req).await?;
        decode_value(value)
    }

    /// Execute a request with an optional JSON body and return the
    /// deserialized response.
    pub async fn request_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<T, PinRequestError> {
        let mut req = self.build_request(endpoint)?;

        if let Some(body) = body {
            // Normalize to a Value so the debug hook and the wire see the
            // same payload, with no accidental double-encoding.
            let val = serde_json::to_value(body).map_err(|e| {
                PinRequestError::new(ErrorKind::Decode, format!("Failed to encode request body: {e}"))
            })?;

            if std::env::var("PIN_OX_HTTP_DEBUG")
                .map(|v| v == "1")
                .unwrap_or(false)
            {
                eprintln!(
                    "[pin-ox-common::request_builder] {:?} {} payload: {}",
                    endpoint.method, endpoint.path, val
                );
            }
            req = req.json(&val);
        }

        let value = self.execute(req).await?;
        decode_value(value)
    }

    /// Execute a multipart form request (for file uploads).
    ///
    /// Multipart and JSON bodies are mutually exclusive by construction: a
    /// call site supplies a form here or a JSON body to
    /// [`RequestBuilder::request_json`], never both.
    pub async fn request_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        form: MultipartForm,
    ) -> Result<T, PinRequestError> {
        let req = self.build_request(endpoint)?.multipart(form.build());
        let value = self.execute(req).await?;
        decode_value(value)
    }

    /// Execute a request and discard the decoded payload (for void
    /// operations). Status classification is identical to the typed paths.
    pub async fn request_unit(&self, endpoint: &Endpoint) -> Result<(), PinRequestError> {
        let req = self.build_request(endpoint)?;
        self.execute(req).await.map(|_| ())
    }

    /// Send the request and decode the response into a raw value.
    async fn execute(&self, req: ReqwestRequestBuilder) -> Result<Value, PinRequestError> {
        let res = req.send().await.map_err(|e| self.transport_error(&e))?;
        let status = res.status();
        let bytes = res.bytes().await.map_err(|e| self.transport_error(&e))?;
        error::decode_response(status, &bytes)
    }

    /// Classify a transport-level failure, distinguishing deadline expiry
    /// from other connection errors.
    fn transport_error(&self, err: &reqwest::Error) -> PinRequestError {
        if err.is_timeout() {
            PinRequestError::new(
                ErrorKind::Timeout,
                format!(
                    "Request timed out after {} seconds",
                    self.config.timeout.as_secs()
                ),
            )
        } else {
            PinRequestError::new(ErrorKind::Transport, format!("Request failed: {err}"))
        }
    }
}

/// Convert a decoded payload into its typed shape.
fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, PinRequestError> {
    serde_json::from_value(value).map_err(|e| {
        PinRequestError::new(ErrorKind::Decode, format!("Unexpected response from API: {e}"))
    })
}

/// Helper struct for building multipart forms
pub struct MultipartForm {
    /// Accumulated reqwest form.
    form: reqwest::multipart::Form,
}

impl MultipartForm {
    /// Create a new multipart form
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: reqwest::multipart::Form::new(),
        }
    }

    /// Add a text field
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form = self.form.text(name.into(), value.into());
        self
    }

    /// Add a file part from bytes, read fully into memory.
    ///
    /// The content type is fixed to `application/octet-stream`.
    #[must_use]
    pub fn file_from_bytes(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        let filename = filename.into();
        let part = reqwest::multipart::Part::bytes(data.clone())
            .file_name(filename.clone())
            .mime_str("application/octet-stream")
            .unwrap_or_else(|_| reqwest::multipart::Part::bytes(data).file_name(filename));
        self.form = self.form.part(name.into(), part);
        self
    }

    /// Build the final form
    #[must_use]
    pub fn build(self) -> reqwest::multipart::Form {
        self.form
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}
