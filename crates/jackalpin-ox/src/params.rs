use bon::Builder;

/// Optional pagination fields recognized by paged endpoints.
///
/// A field left unset is omitted from the outgoing query string; the
/// service applies its own defaults.
#[derive(Debug, Clone, Default, Builder)]
pub struct PageParams {
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Number of items per page.
    pub limit: Option<u32>,
}

impl PageParams {
    /// Query pairs for the fields that are set.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

/// Optional pagination and name-filter fields recognized by the file and
/// collection listing endpoints.
#[derive(Debug, Clone, Default, Builder)]
pub struct ListParams {
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Number of items per page.
    pub limit: Option<u32>,
    /// Filter results by name.
    #[builder(into)]
    pub name: Option<String>,
}

impl ListParams {
    /// Query pairs for the fields that are set.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(ref name) = self.name {
            params.push(("name".to_string(), name.clone()));
        }
        params
    }
}
