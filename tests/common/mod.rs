#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::time::Duration;

use streamed_football::AppState;
use streamed_football::clock::Clock;
use streamed_football::controller::streamed::{Listing, StreamedApi};
use streamed_football::error::AppError;
use streamed_football::model::{StreamDescriptor, StreamSource, decode_streams};

/// 2025-10-09T08:53:20Z; fixture kickoffs are placed around it.
pub const NOW_MS: i64 = 1_760_000_000_000;

pub const LIVE_JSON: &str = include_str!("../fixtures/live.json");
pub const FOOTBALL_JSON: &str = include_str!("../fixtures/football.json");
pub const POPULAR_JSON: &str = include_str!("../fixtures/popular.json");
pub const STREAMS_JSON: &str = include_str!("../fixtures/streams.json");

pub fn fixture(text: &str) -> Value {
    serde_json::from_str(text).expect("fixture is valid json")
}

pub struct FixedClock(AtomicI64);

impl FixedClock {
    pub fn new(now_ms: i64) -> Arc<Self> {
        Arc::new(Self(AtomicI64::new(now_ms)))
    }

    pub fn set(&self, now_ms: i64) {
        self.0.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: i64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Canned listing and stream responses. Unconfigured listings answer with
/// an empty array, unconfigured stream lookups with no streams.
#[derive(Default)]
pub struct FakeStreamedApi {
    listings: HashMap<Listing, Result<Value, AppError>>,
    streams: HashMap<(String, String), Result<Value, AppError>>,
    pub stream_calls: AtomicUsize,
}

impl FakeStreamedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live, football and popular fixtures plus streams for the first live match.
    pub fn with_fixtures() -> Self {
        Self::new()
            .with_listing(Listing::Live, fixture(LIVE_JSON))
            .with_listing(Listing::Football, fixture(FOOTBALL_JSON))
            .with_listing(Listing::Popular, fixture(POPULAR_JSON))
            .with_streams("alpha", "arsenal-chelsea", fixture(STREAMS_JSON))
    }

    pub fn with_listing(mut self, listing: Listing, payload: Value) -> Self {
        self.listings.insert(listing, Ok(payload));
        self
    }

    pub fn with_failing_listing(mut self, listing: Listing) -> Self {
        self.listings
            .insert(listing, Err(AppError::Network("connection refused".into())));
        self
    }

    pub fn with_streams(mut self, source: &str, id: &str, payload: Value) -> Self {
        self.streams
            .insert((source.to_string(), id.to_string()), Ok(payload));
        self
    }

    pub fn with_failing_streams(mut self, source: &str, id: &str) -> Self {
        self.streams.insert(
            (source.to_string(), id.to_string()),
            Err(AppError::Network("timed out".into())),
        );
        self
    }

    pub fn stream_calls(&self) -> usize {
        self.stream_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StreamedApi for FakeStreamedApi {
    async fn fetch_listing(&self, listing: Listing) -> Result<Value, AppError> {
        self.listings
            .get(&listing)
            .cloned()
            .unwrap_or_else(|| Ok(Value::Array(Vec::new())))
    }

    async fn fetch_streams(
        &self,
        source: &StreamSource,
    ) -> Result<Vec<StreamDescriptor>, AppError> {
        self.stream_calls.fetch_add(1, Ordering::SeqCst);
        match self.streams.get(&(source.source.clone(), source.id.clone())) {
            Some(Ok(payload)) => Ok(decode_streams(payload.clone())),
            Some(Err(e)) => Err(e.clone()),
            None => Ok(Vec::new()),
        }
    }
}

pub fn test_state(api: FakeStreamedApi, clock: Arc<FixedClock>) -> AppState {
    AppState::new(Arc::new(api), clock, Duration::from_secs(30))
}
