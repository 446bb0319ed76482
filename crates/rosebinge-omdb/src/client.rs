use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{OmdbDetail, OmdbSearchPage, OmdbSearchPayload};
use crate::error::OmdbError;
use crate::provider::MovieProvider;

const BASE_URL: &str = "https://www.omdbapi.com/";

/// HTTP client for the OMDb API.
///
/// One instance per process is enough; reqwest pools connections
/// internally. No retries, no client-side timeout: transport defaults
/// apply and failures are the caller's to absorb.
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (proxies, local stubs).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, OmdbError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(OmdbError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MovieProvider for OmdbClient {
    async fn lookup(&self, id: &str) -> Result<Option<OmdbDetail>, OmdbError> {
        let detail: OmdbDetail = self
            .get_json(&[("i", id), ("plot", "full")])
            .await?;

        if !detail.is_success() {
            debug!(
                id,
                error = detail.error.as_deref().unwrap_or("unknown"),
                "OMDb reported no match for id"
            );
            return Ok(None);
        }
        Ok(Some(detail))
    }

    async fn search(&self, query: &str, page: u32) -> Result<Option<OmdbSearchPage>, OmdbError> {
        let page_str = page.to_string();
        let payload: OmdbSearchPayload = self
            .get_json(&[("s", query), ("page", page_str.as_str())])
            .await?;

        if !payload.is_success() {
            debug!(
                query,
                page,
                error = payload.error.as_deref().unwrap_or("unknown"),
                "OMDb search returned no matches"
            );
            return Ok(None);
        }
        Ok(Some(OmdbSearchPage {
            hits: payload.search,
            total_results: payload.total_results,
        }))
    }
}
