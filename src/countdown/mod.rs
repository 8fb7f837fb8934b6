pub mod registry;

pub use registry::{CountdownRegistry, DEFAULT_MAX_VIEWERS, new_viewer_id};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::debug;

use crate::clock::Clock;

pub const STARTED_MESSAGE: &str = "Match Started!";
pub const TICK: Duration = Duration::from_secs(1);

const HOUR_MS: i64 = 3_600_000;
const MINUTE_MS: i64 = 60_000;
const SECOND_MS: i64 = 1_000;

/// What the countdown modal shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSpec {
    pub title: String,
    /// 0 when the kickoff is unknown, which reads as already started.
    pub kickoff_ms: i64,
    pub image_src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CountdownFrame {
    Remaining {
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Started,
}

impl CountdownFrame {
    /// Time left until `kickoff_ms` as seen at `now_ms`. Hours are not
    /// folded into days.
    #[must_use]
    pub fn at(kickoff_ms: i64, now_ms: i64) -> Self {
        let diff = kickoff_ms.saturating_sub(now_ms);
        if diff <= 0 {
            return CountdownFrame::Started;
        }
        CountdownFrame::Remaining {
            hours: diff / HOUR_MS,
            minutes: (diff % HOUR_MS) / MINUTE_MS,
            seconds: (diff % MINUTE_MS) / SECOND_MS,
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, CountdownFrame::Started)
    }
}

impl fmt::Display for CountdownFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownFrame::Remaining {
                hours,
                minutes,
                seconds,
            } => write!(f, "{hours}h {minutes}m {seconds}s"),
            CountdownFrame::Started => f.write_str(STARTED_MESSAGE),
        }
    }
}

/// A running countdown. The tick task publishes a fresh frame every second,
/// recomputed from the wall clock, and exits after publishing
/// [`CountdownFrame::Started`]. Dropping the handle stops the task.
pub struct Countdown {
    spec: CountdownSpec,
    frames: watch::Receiver<CountdownFrame>,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn start(spec: CountdownSpec, clock: Arc<dyn Clock>) -> Self {
        let first = CountdownFrame::at(spec.kickoff_ms, clock.now_ms());
        let (tx, frames) = watch::channel(first);
        let kickoff_ms = spec.kickoff_ms;
        let first_tick = Instant::now() + TICK;

        let task = tokio::spawn(async move {
            if first.is_started() {
                return;
            }
            let mut ticker = time::interval_at(first_tick, TICK);
            loop {
                ticker.tick().await;
                let frame = CountdownFrame::at(kickoff_ms, clock.now_ms());
                if tx.send(frame).is_err() || frame.is_started() {
                    break;
                }
            }
        });

        debug!(title = %spec.title, kickoff_ms, "countdown started");
        Self { spec, frames, task }
    }

    #[must_use]
    pub fn spec(&self) -> &CountdownSpec {
        &self.spec
    }

    #[must_use]
    pub fn current(&self) -> CountdownFrame {
        *self.frames.borrow()
    }

    /// A receiver that sees every later frame; it reports closed once the
    /// tick task is gone.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CountdownFrame> {
        self.frames.clone()
    }

    /// Waits for the next published frame. `None` once the tick task has
    /// finished and nothing more will be published.
    pub async fn changed(&mut self) -> Option<CountdownFrame> {
        self.frames.changed().await.ok()?;
        Some(*self.frames.borrow_and_update())
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Idempotent.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Owns at most one countdown; starting another stops the previous one.
pub struct CountdownController {
    clock: Arc<dyn Clock>,
    active: Option<Countdown>,
}

impl CountdownController {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            active: None,
        }
    }

    pub fn start(&mut self, spec: CountdownSpec) -> &mut Countdown {
        self.stop();
        self.active
            .insert(Countdown::start(spec, Arc::clone(&self.clock)))
    }

    /// Stops and discards the active countdown, if any.
    pub fn stop(&mut self) {
        if let Some(countdown) = self.active.take() {
            countdown.stop();
            debug!(title = %countdown.spec.title, "countdown stopped");
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&Countdown> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut Countdown> {
        self.active.as_mut()
    }
}
