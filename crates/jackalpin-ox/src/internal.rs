use std::time::Duration;

use pin_ox_common::request_builder::{RequestBuilder, RequestConfig};

/// Assemble the configured [`RequestBuilder`] for one client call.
pub(crate) fn request_builder(
    client: reqwest::Client,
    base_url: &str,
    api_key: Option<&str>,
    timeout: Duration,
) -> RequestBuilder {
    let mut config = RequestConfig::new(base_url).with_timeout(timeout);
    if let Some(api_key) = api_key {
        config = config.with_bearer_token(api_key);
    }
    RequestBuilder::new(client, config)
}

/// URL-escape a user-supplied name for use as a path segment.
#[must_use]
pub fn escape_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
