use serde::Serialize;
use tracing::debug;

use super::classify::{LiveIdSet, football_only, is_live};
use super::image::{ResolvedImage, resolve_image};
use super::record::MatchRecord;
use super::utils::escape_quotes;
use crate::countdown::CountdownSpec;

pub const NO_MATCHES_MESSAGE: &str = "No football matches available.";
pub const NO_UPCOMING_MESSAGE: &str = "No upcoming football matches.";
pub const UNTITLED_MATCH: &str = "Untitled Match";
pub const DEFAULT_CATEGORY: &str = "Sports";

/// What clicking a card does.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardAction {
    /// Open the watch page for this id.
    Watch { id: String },
    /// Open the countdown modal.
    Countdown(CountdownSpec),
    /// Live, but neither the match nor its sources carry an id.
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardModel {
    pub image: ResolvedImage,
    /// Quote-escaped, as are `title` and `category`.
    pub alt: String,
    pub title: String,
    pub category: String,
    pub live: bool,
    pub action: CardAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardList {
    Placeholder(&'static str),
    Cards(Vec<CardModel>),
}

impl CardList {
    #[must_use]
    pub fn cards(&self) -> &[CardModel] {
        match self {
            CardList::Cards(cards) => cards,
            CardList::Placeholder(_) => &[],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Set for the popular list. Live cards still link to the watch page and
    /// every other card still opens the countdown, exactly as in the default
    /// mode.
    pub treat_popular_like_upcoming: bool,
    pub live_ids: &'a LiveIdSet,
}

impl<'a> RenderOptions<'a> {
    #[must_use]
    pub fn new(live_ids: &'a LiveIdSet) -> Self {
        Self {
            treat_popular_like_upcoming: false,
            live_ids,
        }
    }

    #[must_use]
    pub fn popular(live_ids: &'a LiveIdSet) -> Self {
        Self {
            treat_popular_like_upcoming: true,
            live_ids,
        }
    }
}

/// Football-only cards in input order. Live matches get a watch action,
/// everything else a countdown.
#[must_use]
pub fn build_cards(records: &[MatchRecord], options: RenderOptions<'_>) -> CardList {
    let football = football_only(records);
    if football.is_empty() {
        return CardList::Placeholder(NO_MATCHES_MESSAGE);
    }

    let cards: Vec<CardModel> = football
        .into_iter()
        .map(|record| {
            let live = is_live(record, options.live_ids);
            build_card(record, live)
        })
        .collect();

    debug!(
        cards = cards.len(),
        popular = options.treat_popular_like_upcoming,
        "built match cards"
    );
    CardList::Cards(cards)
}

/// Cards for the upcoming list: football matches kicking off strictly after
/// `now_ms`, earliest first (ties keep input order). Always countdown cards.
#[must_use]
pub fn build_upcoming_cards(records: &[MatchRecord], now_ms: i64) -> CardList {
    let mut upcoming: Vec<&MatchRecord> = football_only(records)
        .into_iter()
        .filter(|r| r.kickoff_ms() > now_ms)
        .collect();
    upcoming.sort_by_key(|r| r.kickoff_ms());

    if upcoming.is_empty() {
        return CardList::Placeholder(NO_UPCOMING_MESSAGE);
    }
    CardList::Cards(upcoming.into_iter().map(|r| build_card(r, false)).collect())
}

fn card_title(record: &MatchRecord) -> &str {
    record.display_title().unwrap_or(UNTITLED_MATCH)
}

fn build_card(record: &MatchRecord, live: bool) -> CardModel {
    let image = resolve_image(Some(record));
    let action = if live {
        record
            .resolved_id()
            .map_or(CardAction::None, |id| CardAction::Watch { id })
    } else {
        CardAction::Countdown(CountdownSpec {
            title: card_title(record).to_string(),
            kickoff_ms: record.kickoff_ms(),
            image_src: image.src.clone(),
            alt: image.alt.clone(),
        })
    };

    CardModel {
        alt: escape_quotes(Some(&image.alt)),
        title: escape_quotes(Some(card_title(record))),
        category: escape_quotes(Some(
            record.category.as_deref().unwrap_or(DEFAULT_CATEGORY),
        )),
        image,
        live,
        action,
    }
}
