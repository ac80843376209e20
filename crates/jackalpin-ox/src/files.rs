use serde::{Deserialize, Serialize};

/// Represents a file to be uploaded.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// The raw byte content of the file.
    pub content: Vec<u8>,
    /// The name of the file.
    pub filename: String,
}

impl FileUpload {
    /// Create an upload from in-memory bytes.
    pub fn from_bytes(content: impl Into<Vec<u8>>, filename: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
        }
    }
}

/// A stored file as returned by listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileDetail {
    /// Server-assigned numeric id.
    pub id: u64,
    /// Name of the file.
    pub file_name: String,
    /// Content identifier on the storage network.
    pub cid: String,
    /// Size in bytes.
    pub size: u64,
    /// Creation timestamp, as reported by the service.
    pub created_at: String,
}

/// A page of files together with the account-wide total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileListResponse {
    /// Files on the requested page.
    pub files: Vec<FileDetail>,
    /// Total number of files, independent of page length.
    pub count: u64,
}

/// Response from uploading or cloning a file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileUploadResponse {
    /// Name of the stored file.
    pub name: String,
    /// Content identifier of the stored file.
    pub cid: String,
    /// Merkle root of the stored file.
    pub merkle: String,
    /// Numeric id, when the service reports one.
    pub id: Option<u64>,
}

/// The bulk upload endpoint answers with one object for a single file and
/// an array otherwise; both shapes normalize into a vector.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// An array of responses.
    Many(Vec<T>),
    /// A single response object.
    One(T),
}

impl<T> OneOrMany<T> {
    /// Normalize into a vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}
