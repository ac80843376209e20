use serde::{Deserialize, Serialize};

use crate::files::FileDetail;

/// A named, server-side grouping of files and nested collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    /// Collection name.
    pub name: String,
    /// Server-assigned numeric id.
    pub id: u64,
    /// Content identifier of the collection.
    pub cid: String,
}

/// A page of collections together with the account-wide total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionListResponse {
    /// Collections on the requested page.
    pub collections: Vec<Collection>,
    /// Total number of collections, independent of page length.
    pub count: u64,
}

/// A collection's contents: its files, nested collections and identity.
///
/// Nested collections are referenced by id, not embedded recursively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionDetailResponse {
    /// Files on the requested page.
    pub files: Vec<FileDetail>,
    /// Total number of files in the collection.
    pub count: u64,
    /// Collections nested under this one.
    pub collections: Vec<Collection>,
    /// Name of this collection.
    pub name: String,
    /// Content identifier of this collection.
    pub cid: String,
}

/// Response from creating a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionCreateResponse {
    /// Id of the new collection.
    pub id: u64,
}
