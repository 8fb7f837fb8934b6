use maud::{Markup, html};

use super::cards::IMG_FALLBACK_ONERROR;
use super::theme::{Theme, render_theme_toggle};
use super::{SITE_TITLE, format_kickoff, home_href, page_href, render_head, watch_href};
use crate::controller::player::{
    NO_OTHER_MATCHES_MESSAGE, NOT_FOUND_MESSAGE, PlayerPage, SidebarEntry, StreamState,
};

pub const NO_STREAM_MESSAGE: &str = "No stream available for this match.";

#[must_use]
pub fn render_player_template(page: &PlayerPage, theme: Theme) -> Markup {
    let toggle_href = page_href(
        "watch",
        &[("id", &page.match_id), ("theme", theme.toggled().as_str())],
    );
    let kickoff = page
        .kickoff_ms
        .map(|ms| format_kickoff(ms, "%Y-%m-%d %H:%M"))
        .unwrap_or_default();

    html! {
        (maud::DOCTYPE)
        html lang="en" {
            (render_head(&page.title))
            body class=[theme.body_class()] {
                header class="site-header" {
                    a href=(home_href(theme)) { h1 { (SITE_TITLE) } }
                    (render_theme_toggle(theme, &toggle_href))
                }
                main class="player-layout" {
                    section class="player-main" {
                        h2 id="matchTitle" { (page.title) }
                        p id="matchTime" { (kickoff) }
                        @match &page.stream {
                            StreamState::Embedded { embed_url } => {
                                iframe id="player" src=(embed_url) allowfullscreen {}
                            }
                            StreamState::Unavailable => {
                                iframe id="player" {}
                                div id="noStream" class="no-stream" { (NO_STREAM_MESSAGE) }
                            }
                        }
                    }
                    aside class="player-sidebar" {
                        h3 { "Other Live Matches" }
                        div id="otherMatches" class="row" {
                            @if page.sidebar.is_empty() {
                                p class="text-muted" { (NO_OTHER_MATCHES_MESSAGE) }
                            }
                            @for entry in &page.sidebar {
                                (render_sidebar_entry(entry, theme))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_sidebar_entry(entry: &SidebarEntry, theme: Theme) -> Markup {
    let time = entry
        .kickoff_ms
        .map(|ms| format_kickoff(ms, "%H:%M"))
        .unwrap_or_default();
    let body = html! {
        img src=(entry.image.src) alt=(entry.alt) class="card-img-top" loading="lazy" onerror=(IMG_FALLBACK_ONERROR);
        div class="card-body p-2" {
            h6 { (entry.title) }
            small class="text-muted" { (time) }
        }
    };
    html! {
        div class="col-12" {
            @match &entry.id {
                Some(id) => { a class="card" href=(watch_href(id, theme)) { (body) } }
                None => { div class="card" { (body) } }
            }
        }
    }
}

/// Blocking notice for an id the live listing does not know.
#[must_use]
pub fn render_not_found_template(match_id: &str, theme: Theme) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            (render_head(SITE_TITLE))
            body class=[theme.body_class()] {
                div class="alert" role="alert" data-match-id=(match_id) {
                    p { (NOT_FOUND_MESSAGE) }
                    a href=(home_href(theme)) { "Back to matches" }
                }
            }
        }
    }
}
