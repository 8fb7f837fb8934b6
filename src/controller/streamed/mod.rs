pub mod client;

pub use client::ReqwestStreamedClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;
use crate::model::{StreamDescriptor, StreamSource};

/// The three listings the site shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listing {
    Live,
    Football,
    Popular,
}

impl Listing {
    /// Path below the matches API base.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Listing::Live => "live",
            Listing::Football => "football",
            Listing::Popular => "football/popular",
        }
    }
}

#[async_trait]
pub trait StreamedApi: Send + Sync {
    /// Raw listing payload; callers normalize it.
    async fn fetch_listing(&self, listing: Listing) -> Result<Value, AppError>;

    /// Playable streams for one `(source, id)` pair, in response order.
    async fn fetch_streams(&self, source: &StreamSource)
    -> Result<Vec<StreamDescriptor>, AppError>;
}
