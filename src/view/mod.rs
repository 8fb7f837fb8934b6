pub mod cards;
pub mod countdown;
pub mod index;
pub mod player;
pub mod theme;

use chrono::{Local, TimeZone};
use maud::{Markup, html};

use crate::HTMX_PATH;
use theme::Theme;

pub const SITE_TITLE: &str = "Football Streams";

/// Relative link to `page` with url-encoded query parameters.
#[must_use]
pub fn page_href(page: &str, params: &[(&str, &str)]) -> String {
    let query = reqwest::Url::parse_with_params("http://localhost/", params)
        .ok()
        .and_then(|url| url.query().map(str::to_string))
        .unwrap_or_default();
    if query.is_empty() {
        page.to_string()
    } else {
        format!("{page}?{query}")
    }
}

/// Watch page link; a dark theme is carried along.
#[must_use]
pub fn watch_href(id: &str, theme: Theme) -> String {
    match theme {
        Theme::Light => page_href("watch", &[("id", id)]),
        Theme::Dark => page_href("watch", &[("id", id), ("theme", theme.as_str())]),
    }
}

#[must_use]
pub fn home_href(theme: Theme) -> String {
    match theme {
        Theme::Light => "./".to_string(),
        Theme::Dark => page_href("./", &[("theme", theme.as_str())]),
    }
}

/// Kickoff rendered in server-local time; empty for an out-of-range value.
#[must_use]
pub fn format_kickoff(kickoff_ms: i64, fmt: &str) -> String {
    Local
        .timestamp_millis_opt(kickoff_ms)
        .single()
        .map(|t| t.format(fmt).to_string())
        .unwrap_or_default()
}

pub(crate) fn render_head(title: &str) -> Markup {
    html! {
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
    }
}
