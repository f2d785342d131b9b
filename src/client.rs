use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Response, Url};
use tracing::debug;
use url::form_urlencoded;

pub const PROVIDER_PATH: &str = "/api/provider";

/// Thin client for the provider's date validation endpoint.
///
/// Responses are handed back untouched, whatever their status.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: Client,
    base_url: Url,
}

impl ProviderClient {
    pub fn new(base_uri: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_uri)
    }

    pub fn with_client(http: Client, base_uri: &str) -> Result<Self> {
        let base_url = Url::parse(base_uri).with_context(|| format!("Invalid provider uri: {}", base_uri))?;
        Ok(ProviderClient { http, base_url })
    }

    /// Builds `{base}/api/provider?validDateTime={raw_input}`.
    ///
    /// The endpoint path is appended to whatever path the base uri already has.
    /// The value is form-encoded so the provider decodes exactly `raw_input`:
    /// an empty string stays an empty parameter and `/` is left readable.
    pub fn request_url(&self, raw_input: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Provider uri can't have a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(PROVIDER_PATH.split('/').filter(|s| !s.is_empty()));
        url.set_query(Some(&format!("validDateTime={}", encode_query_value(raw_input))));
        Ok(url)
    }

    pub async fn validate_date_time(&self, raw_input: &str) -> Result<Response> {
        let url = self.request_url(raw_input)?;
        debug!("GET {}", url);

        self.http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))
    }
}

// `/` is the only byte byte_serialize escapes that a query may hold as is.
// Any literal `%` is already `%25` at this point, so `%2F` always stands for `/`.
fn encode_query_value(raw_input: &str) -> String {
    form_urlencoded::byte_serialize(raw_input.as_bytes())
        .collect::<String>()
        .replace("%2F", "/")
}

/// One-shot helper for callers that don't keep a client around.
pub async fn validate_date_time_using_provider_api(raw_input: &str, base_uri: &str) -> Result<Response> {
    ProviderClient::new(base_uri)?.validate_date_time(raw_input).await
}
