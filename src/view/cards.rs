use maud::{Markup, html};
use serde_json::json;

use super::theme::Theme;
use super::watch_href;
use crate::countdown::CountdownSpec;
use crate::model::{CardAction, CardList, CardModel};

/// Swaps a broken image for the local logo, once.
pub const IMG_FALLBACK_ONERROR: &str = "this.onerror=null;this.src='assets/images/logo.png'";

#[must_use]
pub fn render_card_list(list: &CardList, viewer: &str, theme: Theme) -> Markup {
    html! {
        @match list {
            CardList::Placeholder(message) => {
                div class="empty-state" { (message) }
            }
            CardList::Cards(cards) => {
                @for card in cards {
                    (render_card(card, viewer, theme))
                }
            }
        }
    }
}

#[must_use]
pub fn render_card(card: &CardModel, viewer: &str, theme: Theme) -> Markup {
    html! {
        @match &card.action {
            CardAction::Watch { id } => {
                a class="match-card" href=(watch_href(id, theme)) data-match-id=(id) {
                    div class="live-badge" { "LIVE" }
                    (render_card_body(card))
                }
            }
            CardAction::Countdown(spec) => {
                div class="match-card"
                    hx-post="countdown"
                    hx-vals=(countdown_vals(spec, viewer))
                    hx-target="#countdownModal"
                    hx-swap="innerHTML" {
                    (render_card_body(card))
                }
            }
            CardAction::None => {
                div class="match-card" {
                    @if card.live {
                        div class="live-badge" { "LIVE" }
                    }
                    (render_card_body(card))
                }
            }
        }
    }
}

fn render_card_body(card: &CardModel) -> Markup {
    html! {
        img src=(card.image.src) alt=(card.alt) loading="lazy" onerror=(IMG_FALLBACK_ONERROR);
        h6 class="mt-2" { (card.title) }
        small { (card.category) }
    }
}

/// Form fields posted to `countdown` when the card is clicked.
#[must_use]
pub fn countdown_vals(spec: &CountdownSpec, viewer: &str) -> String {
    json!({
        "viewer": viewer,
        "title": spec.title,
        "kickoff_ms": spec.kickoff_ms,
        "image_src": spec.image_src,
        "alt": spec.alt,
    })
    .to_string()
}
