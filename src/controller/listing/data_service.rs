use futures::future::try_join;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::controller::streamed::{Listing, StreamedApi};
use crate::error::AppError;
use crate::model::{
    CardList, LiveIdSet, MatchRecord, RenderOptions, annotate_live, build_cards,
    build_upcoming_cards, in_live_set, live_id_set, normalize_response,
};

/// The three containers of the listing page. `None` means the section was
/// never reached because an earlier step failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingPage {
    pub live: Option<CardList>,
    pub upcoming: Option<CardList>,
    pub popular: Option<CardList>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Live,
    Upcoming,
    Popular,
}

impl Section {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "live" => Some(Section::Live),
            "upcoming" => Some(Section::Upcoming),
            "popular" => Some(Section::Popular),
            _ => None,
        }
    }

    /// Container element id on the listing page.
    #[must_use]
    pub fn container_id(self) -> &'static str {
        match self {
            Section::Live => "liveMatches",
            Section::Upcoming => "upcomingMatches",
            Section::Popular => "popularMatches",
        }
    }
}

/// Loads all three sections. Fetches run concurrently; results are applied
/// in order (live, upcoming, popular) and the first failure is logged and
/// leaves the remaining sections empty. No retries.
pub async fn load_listing(api: &dyn StreamedApi, now_ms: i64) -> ListingPage {
    let (live, football, popular) = tokio::join!(
        api.fetch_listing(Listing::Live),
        api.fetch_listing(Listing::Football),
        api.fetch_listing(Listing::Popular),
    );

    let mut page = ListingPage::default();
    if let Err(e) = fill_listing(&mut page, live, football, popular, now_ms) {
        error!("Fetch error: {e}");
    }
    page
}

fn fill_listing(
    page: &mut ListingPage,
    live: Result<Value, AppError>,
    football: Result<Value, AppError>,
    popular: Result<Value, AppError>,
    now_ms: i64,
) -> Result<(), AppError> {
    let live = normalize_response(live?);
    let live_ids = live_id_set(&live);
    page.live = Some(live_cards(&live, &live_ids));

    page.upcoming = Some(upcoming_cards(
        normalize_response(football?),
        &live_ids,
        now_ms,
    ));

    page.popular = Some(popular_cards(normalize_response(popular?), &live_ids));
    Ok(())
}

/// Loads a single section. Every section needs the live listing; the
/// section's own listing is fetched alongside it.
///
/// # Errors
///
/// Returns an error if a listing fetch fails.
pub async fn load_section(
    api: &dyn StreamedApi,
    section: Section,
    now_ms: i64,
) -> Result<CardList, AppError> {
    let own = match section {
        Section::Live => None,
        Section::Upcoming => Some(Listing::Football),
        Section::Popular => Some(Listing::Popular),
    };
    let (live, own) = try_join(api.fetch_listing(Listing::Live), async {
        match own {
            Some(listing) => api.fetch_listing(listing).await.map(Some),
            None => Ok(None),
        }
    })
    .await?;

    let live = normalize_response(live);
    let live_ids = live_id_set(&live);
    Ok(match (section, own) {
        (Section::Upcoming, Some(football)) => {
            upcoming_cards(normalize_response(football), &live_ids, now_ms)
        }
        (Section::Popular, Some(popular)) => popular_cards(normalize_response(popular), &live_ids),
        _ => live_cards(&live, &live_ids),
    })
}

fn live_cards(live: &[MatchRecord], live_ids: &LiveIdSet) -> CardList {
    build_cards(live, RenderOptions::new(live_ids))
}

fn upcoming_cards(football: Vec<MatchRecord>, live_ids: &LiveIdSet, now_ms: i64) -> CardList {
    let not_live: Vec<MatchRecord> = football
        .into_iter()
        .filter(|r| !in_live_set(r, live_ids))
        .collect();
    build_upcoming_cards(&not_live, now_ms)
}

fn popular_cards(popular: Vec<MatchRecord>, live_ids: &LiveIdSet) -> CardList {
    let popular = annotate_live(popular, live_ids);
    build_cards(&popular, RenderOptions::popular(live_ids))
}
