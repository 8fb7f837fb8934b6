use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::{Listing, StreamedApi};
use crate::error::AppError;
use crate::model::{StreamDescriptor, StreamSource, decode_streams};

pub struct ReqwestStreamedClient {
    client: Client,
    api_base: String,
    stream_host: String,
}

impl ReqwestStreamedClient {
    #[must_use]
    pub fn new(api_base: &str, stream_host: &str) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            stream_host: stream_host.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn listing_url(&self, listing: Listing) -> String {
        format!("{}/{}", self.api_base, listing.path())
    }

    #[must_use]
    pub fn stream_url(&self, source: &StreamSource) -> String {
        format!("{}/stream/{}/{}", self.stream_host, source.source, source.id)
    }

    async fn get_json(&self, url: &str) -> Result<Value, AppError> {
        debug!(%url, "GET");
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl StreamedApi for ReqwestStreamedClient {
    async fn fetch_listing(&self, listing: Listing) -> Result<Value, AppError> {
        self.get_json(&self.listing_url(listing)).await
    }

    async fn fetch_streams(
        &self,
        source: &StreamSource,
    ) -> Result<Vec<StreamDescriptor>, AppError> {
        let json = self.get_json(&self.stream_url(source)).await?;
        Ok(decode_streams(json))
    }
}
