use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{CountdownController, CountdownFrame, CountdownSpec};
use crate::clock::Clock;

/// Upper bound on concurrently tracked viewers.
pub const DEFAULT_MAX_VIEWERS: usize = 4096;

/// Id handed to each rendered listing page so its countdown modal can be
/// addressed on later requests: 128 random bits, hex encoded.
#[must_use]
pub fn new_viewer_id() -> String {
    let bits: u128 = rand::random();
    format!("{bits:032x}")
}

struct ViewerEntry {
    controller: CountdownController,
    last_seen_ms: i64,
}

/// One countdown controller per viewer. Entries not polled within the idle
/// window are dropped by [`CountdownRegistry::sweep_idle`], which stops their
/// tick task. At most `max_viewers` entries are kept; opening one more evicts
/// the least recently seen viewer.
#[derive(Clone)]
pub struct CountdownRegistry {
    viewers: Arc<RwLock<HashMap<String, ViewerEntry>>>,
    clock: Arc<dyn Clock>,
    idle_ms: i64,
    max_viewers: usize,
}

impl CountdownRegistry {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, idle: Duration) -> Self {
        Self {
            viewers: Arc::new(RwLock::new(HashMap::new())),
            clock,
            idle_ms: i64::try_from(idle.as_millis()).unwrap_or(i64::MAX),
            max_viewers: DEFAULT_MAX_VIEWERS,
        }
    }

    #[must_use]
    pub fn with_max_viewers(mut self, max_viewers: usize) -> Self {
        self.max_viewers = max_viewers.max(1);
        self
    }

    /// Starts a countdown for `viewer`, replacing any it already had, and
    /// returns the first frame.
    pub async fn open(&self, viewer: &str, spec: CountdownSpec) -> CountdownFrame {
        let now = self.clock.now_ms();
        let mut viewers = self.viewers.write().await;
        if !viewers.contains_key(viewer) {
            while viewers.len() >= self.max_viewers {
                let Some(oldest) = viewers
                    .iter()
                    .min_by_key(|(_, entry)| entry.last_seen_ms)
                    .map(|(id, _)| id.clone())
                else {
                    break;
                };
                viewers.remove(&oldest);
                warn!(max_viewers = self.max_viewers, "countdown registry full, evicted a viewer");
            }
        }
        let entry = viewers
            .entry(viewer.to_string())
            .or_insert_with(|| ViewerEntry {
                controller: CountdownController::new(Arc::clone(&self.clock)),
                last_seen_ms: now,
            });
        entry.last_seen_ms = now;
        entry.controller.start(spec).current()
    }

    /// Latest frame for `viewer`, or `None` when it has no countdown.
    pub async fn poll(&self, viewer: &str) -> Option<CountdownFrame> {
        let now = self.clock.now_ms();
        let mut viewers = self.viewers.write().await;
        let entry = viewers.get_mut(viewer)?;
        entry.last_seen_ms = now;
        entry.controller.active().map(super::Countdown::current)
    }

    /// Dismissal: stops and forgets the viewer's countdown.
    pub async fn close(&self, viewer: &str) -> bool {
        let removed = self.viewers.write().await.remove(viewer);
        match removed {
            Some(mut entry) => {
                entry.controller.stop();
                true
            }
            None => false,
        }
    }

    /// Drops viewers idle for longer than the window; returns how many.
    pub async fn sweep_idle(&self) -> usize {
        let now = self.clock.now_ms();
        let idle_ms = self.idle_ms;
        let mut viewers = self.viewers.write().await;
        let before = viewers.len();
        viewers.retain(|_, entry| now.saturating_sub(entry.last_seen_ms) <= idle_ms);
        let swept = before - viewers.len();
        if swept > 0 {
            debug!(swept, "stopped idle countdowns");
        }
        swept
    }

    pub async fn len(&self) -> usize {
        self.viewers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let registry = self.clone();
        info!(every_secs = every.as_secs(), "countdown sweeper running");
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                registry.sweep_idle().await;
            }
        })
    }
}
