use serde::Serialize;
use tracing::{error, warn};

use crate::controller::streamed::{Listing, StreamedApi};
use crate::error::AppError;
use crate::model::card::UNTITLED_MATCH;
use crate::model::{
    MatchRecord, ResolvedImage, escape_quotes, is_football, normalize_response, resolve_image,
};

pub const NOT_FOUND_MESSAGE: &str = "Match not found.";
pub const NO_OTHER_MATCHES_MESSAGE: &str = "No other live football matches.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StreamState {
    Embedded { embed_url: String },
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarEntry {
    /// `None` when neither the match nor its sources carry an id; such an
    /// entry is shown but not clickable.
    pub id: Option<String>,
    pub title: String,
    pub image: ResolvedImage,
    pub alt: String,
    pub kickoff_ms: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPage {
    pub match_id: String,
    pub title: String,
    pub kickoff_ms: Option<i64>,
    pub stream: StreamState,
    pub sidebar: Vec<SidebarEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlayerOutcome {
    NotFound { match_id: String },
    Found(PlayerPage),
}

/// Resolves the watch page for `match_id` from the live listing. Ids compare
/// loosely, so `"42"` finds a match whose id is the number 42.
///
/// # Errors
///
/// Returns an error if the live listing cannot be fetched. A failed stream
/// lookup is not an error: it is logged and the page shows no stream.
pub async fn load_player(api: &dyn StreamedApi, match_id: &str) -> Result<PlayerOutcome, AppError> {
    let live = normalize_response(api.fetch_listing(Listing::Live).await?);

    let Some(current) = live.iter().find(|m| is_match(m, match_id)) else {
        warn!(match_id, "match not in live listing");
        return Ok(PlayerOutcome::NotFound {
            match_id: match_id.to_string(),
        });
    };

    let stream = resolve_stream(api, current).await;
    let sidebar = live
        .iter()
        .filter(|m| !is_match(m, match_id) && is_football(m))
        .map(sidebar_entry)
        .collect();

    Ok(PlayerOutcome::Found(PlayerPage {
        match_id: match_id.to_string(),
        title: current.display_title().unwrap_or(UNTITLED_MATCH).to_string(),
        kickoff_ms: current.date,
        stream,
        sidebar,
    }))
}

/// Records without an id are addressed by their first source's id, the same
/// fallback the listing cards link with.
fn is_match(record: &MatchRecord, match_id: &str) -> bool {
    match &record.id {
        Some(id) => id.loosely_equals(match_id),
        None => record.first_source().is_some_and(|s| s.id == match_id),
    }
}

async fn resolve_stream(api: &dyn StreamedApi, record: &MatchRecord) -> StreamState {
    let Some(source) = record.first_source() else {
        return StreamState::Unavailable;
    };
    match api.fetch_streams(source).await {
        Ok(streams) => match streams.into_iter().next().and_then(|s| s.embed_url) {
            Some(embed_url) => StreamState::Embedded { embed_url },
            None => {
                warn!(source = %source.source, id = %source.id, "no streams returned");
                StreamState::Unavailable
            }
        },
        Err(e) => {
            error!(source = %source.source, id = %source.id, "stream lookup failed: {e}");
            StreamState::Unavailable
        }
    }
}

fn sidebar_entry(record: &MatchRecord) -> SidebarEntry {
    let image = resolve_image(Some(record));
    SidebarEntry {
        id: record.resolved_id(),
        title: escape_quotes(record.title.as_deref()),
        alt: escape_quotes(Some(&image.alt)),
        image,
        kickoff_ms: record.date.filter(|d| *d != 0),
    }
}
