use std::sync::Arc;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::controller::streamed::{ReqwestStreamedClient, StreamedApi};
use crate::countdown::CountdownRegistry;

/// Shared per-server state handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn StreamedApi>,
    pub clock: Arc<dyn Clock>,
    pub countdowns: CountdownRegistry,
}

impl AppState {
    #[must_use]
    pub fn new(api: Arc<dyn StreamedApi>, clock: Arc<dyn Clock>, countdown_idle: Duration) -> Self {
        let countdowns = CountdownRegistry::new(Arc::clone(&clock), countdown_idle);
        Self {
            api,
            clock,
            countdowns,
        }
    }

    #[must_use]
    pub fn from_args(args: &crate::args::CleanArgs) -> Self {
        let api = ReqwestStreamedClient::new(&args.api_base, &args.stream_host);
        Self::new(
            Arc::new(api),
            Arc::new(SystemClock),
            Duration::from_secs(args.countdown_idle_secs),
        )
    }
}
