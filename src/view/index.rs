use maud::{Markup, html};

use super::cards::render_card_list;
use super::theme::{Theme, render_theme_toggle};
use super::{SITE_TITLE, page_href, render_head};
use crate::controller::listing::{ListingPage, Section};
use crate::model::CardList;

#[must_use]
pub fn render_index_template(page: &ListingPage, theme: Theme, viewer: &str) -> Markup {
    let toggle_href = page_href("./", &[("theme", theme.toggled().as_str())]);
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            (render_head(SITE_TITLE))
            body class=[theme.body_class()] {
                header class="site-header" {
                    h1 { (SITE_TITLE) }
                    (render_theme_toggle(theme, &toggle_href))
                }
                (render_section("Live Now", Section::Live, page.live.as_ref(), viewer, theme))
                (render_section("Upcoming", Section::Upcoming, page.upcoming.as_ref(), viewer, theme))
                (render_section("Popular", Section::Popular, page.popular.as_ref(), viewer, theme))
                div id="countdownModal" class="modal" {}
            }
        }
    }
}

/// A section that was never loaded keeps its loading indicator.
fn render_section(
    heading: &str,
    section: Section,
    list: Option<&CardList>,
    viewer: &str,
    theme: Theme,
) -> Markup {
    html! {
        section class="match-section" {
            h2 { (heading) }
            div id=(section.container_id()) class="match-row" {
                @match list {
                    Some(list) => { (render_card_list(list, viewer, theme)) }
                    None => {
                        img alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
                    }
                }
            }
        }
    }
}
