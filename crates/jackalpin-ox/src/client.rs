use bon::Builder;
use core::fmt;
use std::time::Duration;

use pin_ox_common::request_builder::{Endpoint, HttpMethod, MultipartForm, RequestBuilder};

use crate::{
    account::{AccountIdResponse, AccountUsage},
    collections::{CollectionCreateResponse, CollectionDetailResponse, CollectionListResponse},
    credentials,
    error::JackalPinError,
    files::{FileListResponse, FileUpload, FileUploadResponse, OneOrMany},
    internal,
    keys::{Key, KeyListResponse, TestKeyResponse},
    params::{ListParams, PageParams},
    payment::{BillingPortalResponse, CheckoutSessionResponse},
    queue::QueueSizeResponse,
};

const BASE_URL: &str = "https://pinapi.jackalprotocol.com/api";
const TEST_URL: &str = "test";
const KEYS_URL: &str = "keys";
const FILES_URL: &str = "files";
// The bulk upload route is versioned while everything else is not; that is
// the service contract as shipped.
const BULK_FILES_URL: &str = "v1/files";
const CLONE_URL: &str = "clone";
const PIN_URL: &str = "pin";
const COLLECTIONS_URL: &str = "collections";
const QUEUE_URL: &str = "queue";
const ACCOUNTS_URL: &str = "accounts";
const PAYMENT_URL: &str = "payment";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Jackal Pin pinning service.
#[derive(Clone, Builder)]
pub struct JackalPin {
    /// Bearer token; operations that require auth fail without one.
    #[builder(into)]
    pub(crate) api_key: Option<String>,
    /// Underlying HTTP client.
    #[builder(default)]
    pub(crate) client: reqwest::Client,
    /// Service base URL.
    #[builder(default = BASE_URL.to_string(), into)]
    pub(crate) base_url: String,
    /// Per-request deadline spanning connection and response.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub(crate) timeout: Duration,
}

impl JackalPin {
    /// Create a new Jackal Pin client with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Build a client from the `JACKALPIN_API_KEY` environment variable.
    pub fn load_from_env() -> Result<Self, std::env::VarError> {
        let api_key = credentials::api_key_from_env()?;
        Ok(Self::builder().api_key(api_key).build())
    }

    /// Replace the API key used for authentication.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    /// Create the configured request builder for one call.
    fn request_helper(&self) -> RequestBuilder {
        internal::request_builder(
            self.client.clone(),
            &self.base_url,
            self.api_key.as_deref(),
            self.timeout,
        )
    }

    /// Generic method for API requests without body
    async fn api_request<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<T, JackalPinError> {
        self.request_helper().request(&endpoint).await
    }

    /// Generic method for API requests with JSON body
    async fn api_request_with_body<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T, JackalPinError> {
        self.request_helper().request_json(&endpoint, Some(body)).await
    }

    /// Generic method for multipart upload requests
    async fn api_multipart<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        form: MultipartForm,
    ) -> Result<T, JackalPinError> {
        self.request_helper().request_multipart(&endpoint, form).await
    }

    /// Generic method for void operations
    async fn api_unit(&self, endpoint: Endpoint) -> Result<(), JackalPinError> {
        self.request_helper().request_unit(&endpoint).await
    }
}

impl JackalPin {
    /// Test whether the configured API key is valid.
    pub async fn test_key(&self) -> Result<TestKeyResponse, JackalPinError> {
        let endpoint = Endpoint::new(TEST_URL, HttpMethod::Get);
        self.api_request(endpoint).await
    }

    /// List the account's API keys.
    pub async fn list_keys(&self, params: &PageParams) -> Result<KeyListResponse, JackalPinError> {
        let endpoint =
            Endpoint::new(KEYS_URL, HttpMethod::Get).with_query_params(params.to_query());
        self.api_request(endpoint).await
    }

    /// Generate a new API key under the given name.
    ///
    /// The returned [`Key`] is the only place the secret value appears.
    pub async fn create_key(&self, key_name: &str) -> Result<Key, JackalPinError> {
        let endpoint = Endpoint::new(
            format!("{KEYS_URL}/{}", internal::escape_path_segment(key_name)),
            HttpMethod::Post,
        );
        self.api_request(endpoint).await
    }

    /// Delete an API key by name.
    pub async fn delete_key(&self, key_name: &str) -> Result<(), JackalPinError> {
        let endpoint = Endpoint::new(
            format!("{KEYS_URL}/{}", internal::escape_path_segment(key_name)),
            HttpMethod::Delete,
        );
        self.api_unit(endpoint).await
    }

    /// List the account's files.
    pub async fn list_files(&self, params: &ListParams) -> Result<FileListResponse, JackalPinError> {
        let endpoint =
            Endpoint::new(FILES_URL, HttpMethod::Get).with_query_params(params.to_query());
        self.api_request(endpoint).await
    }

    /// Upload a single file.
    pub async fn upload_file(
        &self,
        upload: &FileUpload,
    ) -> Result<FileUploadResponse, JackalPinError> {
        let form =
            MultipartForm::new().file_from_bytes("file", &upload.filename, upload.content.clone());
        let endpoint = Endpoint::new(FILES_URL, HttpMethod::Post);
        self.api_multipart(endpoint, form).await
    }

    /// Upload multiple files in one request.
    ///
    /// The service answers with a single object for one file and an array
    /// otherwise; both shapes are normalized into a vector.
    pub async fn upload_files(
        &self,
        uploads: &[FileUpload],
    ) -> Result<Vec<FileUploadResponse>, JackalPinError> {
        let mut form = MultipartForm::new();
        for upload in uploads {
            form = form.file_from_bytes("files", &upload.filename, upload.content.clone());
        }
        let endpoint = Endpoint::new(BULK_FILES_URL, HttpMethod::Post);
        let responses: OneOrMany<FileUploadResponse> = self.api_multipart(endpoint, form).await?;
        Ok(responses.into_vec())
    }

    /// Delete a file by id.
    pub async fn delete_file(&self, file_id: u64) -> Result<(), JackalPinError> {
        let endpoint = Endpoint::new(format!("{FILES_URL}/{file_id}"), HttpMethod::Delete);
        self.api_unit(endpoint).await
    }

    /// Ingest a file from a URL.
    pub async fn clone_file(&self, link: &str) -> Result<FileUploadResponse, JackalPinError> {
        let endpoint = Endpoint::new(CLONE_URL, HttpMethod::Post);
        let body = serde_json::json!({ "link": link });
        self.api_request_with_body(endpoint, &body).await
    }

    /// Pin existing network content by its content identifier.
    pub async fn pin_by_cid(&self, cid: &str) -> Result<(), JackalPinError> {
        let endpoint = Endpoint::new(format!("{PIN_URL}/{cid}"), HttpMethod::Post);
        self.api_unit(endpoint).await
    }

    /// Create a new collection under the given name.
    pub async fn create_collection(
        &self,
        name: &str,
    ) -> Result<CollectionCreateResponse, JackalPinError> {
        let endpoint = Endpoint::new(
            format!("{COLLECTIONS_URL}/{}", internal::escape_path_segment(name)),
            HttpMethod::Post,
        );
        self.api_request(endpoint).await
    }

    /// List the account's collections.
    pub async fn list_collections(
        &self,
        params: &ListParams,
    ) -> Result<CollectionListResponse, JackalPinError> {
        let endpoint =
            Endpoint::new(COLLECTIONS_URL, HttpMethod::Get).with_query_params(params.to_query());
        self.api_request(endpoint).await
    }

    /// Get a collection's contents, including its files.
    pub async fn get_collection(
        &self,
        collection_id: u64,
        params: &PageParams,
    ) -> Result<CollectionDetailResponse, JackalPinError> {
        let endpoint = Endpoint::new(
            format!("{COLLECTIONS_URL}/{collection_id}"),
            HttpMethod::Get,
        )
        .with_query_params(params.to_query());
        self.api_request(endpoint).await
    }

    /// Delete a collection by id.
    pub async fn delete_collection(&self, collection_id: u64) -> Result<(), JackalPinError> {
        let endpoint = Endpoint::new(
            format!("{COLLECTIONS_URL}/{collection_id}"),
            HttpMethod::Delete,
        );
        self.api_unit(endpoint).await
    }

    /// Add a file to a collection.
    pub async fn add_file_to_collection(
        &self,
        collection_id: u64,
        file_id: u64,
    ) -> Result<(), JackalPinError> {
        let endpoint = Endpoint::new(
            format!("{COLLECTIONS_URL}/{collection_id}/{file_id}"),
            HttpMethod::Put,
        );
        self.api_unit(endpoint).await
    }

    /// Remove a file from a collection.
    pub async fn remove_file_from_collection(
        &self,
        collection_id: u64,
        file_id: u64,
    ) -> Result<(), JackalPinError> {
        let endpoint = Endpoint::new(
            format!("{COLLECTIONS_URL}/{collection_id}/{file_id}"),
            HttpMethod::Delete,
        );
        self.api_unit(endpoint).await
    }

    /// Reference a collection from a parent collection.
    pub async fn add_collection_reference(
        &self,
        parent_id: u64,
        child_id: u64,
    ) -> Result<(), JackalPinError> {
        let endpoint = Endpoint::new(
            format!("{COLLECTIONS_URL}/{parent_id}/c/{child_id}"),
            HttpMethod::Put,
        );
        self.api_unit(endpoint).await
    }

    /// Get the current processing queue depth. No credentials required.
    pub async fn get_queue_size(&self) -> Result<QueueSizeResponse, JackalPinError> {
        let endpoint = Endpoint::new(QUEUE_URL, HttpMethod::Get).public();
        self.api_request(endpoint).await
    }

    /// Create a customer account.
    pub async fn create_account(&self) -> Result<(), JackalPinError> {
        let endpoint = Endpoint::new(ACCOUNTS_URL, HttpMethod::Post);
        self.api_unit(endpoint).await
    }

    /// Get the account's storage usage.
    pub async fn get_usage(&self) -> Result<AccountUsage, JackalPinError> {
        let endpoint = Endpoint::new(format!("{ACCOUNTS_URL}/usage"), HttpMethod::Get);
        self.api_request(endpoint).await
    }

    /// Get the account id hash.
    pub async fn get_account_id(&self) -> Result<AccountIdResponse, JackalPinError> {
        let endpoint = Endpoint::new(format!("{ACCOUNTS_URL}/id"), HttpMethod::Get);
        self.api_request(endpoint).await
    }

    /// Create a checkout session for the given price lookup key.
    ///
    /// `count` is only sent when it differs from the default quantity of 1.
    pub async fn create_checkout_session(
        &self,
        lookup_key: &str,
        count: u32,
    ) -> Result<CheckoutSessionResponse, JackalPinError> {
        let mut query_params = Vec::new();
        if count != 1 {
            query_params.push(("count".to_string(), count.to_string()));
        }
        let endpoint = Endpoint::new(
            format!(
                "{PAYMENT_URL}/checkout/{}",
                internal::escape_path_segment(lookup_key)
            ),
            HttpMethod::Post,
        )
        .with_query_params(query_params);
        self.api_request(endpoint).await
    }

    /// Get the URL of the billing management portal.
    pub async fn get_billing_portal_url(&self) -> Result<BillingPortalResponse, JackalPinError> {
        let endpoint = Endpoint::new(format!("{PAYMENT_URL}/manage"), HttpMethod::Get);
        self.api_request(endpoint).await
    }
}

impl Default for JackalPin {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for JackalPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JackalPin")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("client", &self.client)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
