use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::record::MatchRecord;

pub const POSTER_PROXY_BASE: &str = "https://streamed.pk/api/images/proxy/";
pub const BADGE_PROXY_BASE: &str = "https://streamed.pk/api/images/badge/";
pub const COMBINED_POSTER_BASE: &str = "https://streamed.pk/api/images/poster/";
pub const FALLBACK_IMAGE: &str = "assets/images/logo.png";
pub const DEFAULT_ALT: &str = "Match Image";

static IMAGE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(png|jpe?g|gif|webp|svg)$").expect("image extension pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedImage {
    pub src: String,
    pub alt: String,
    pub is_external: bool,
}

#[must_use]
pub fn is_full_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

#[must_use]
pub fn has_image_extension(s: &str) -> bool {
    IMAGE_EXTENSION.is_match(s)
}

/// Absolute URLs pass through; anything else is treated as a path under
/// `base`, with `.webp` appended unless it already names an image file.
fn proxied(base: &str, token: &str) -> String {
    if is_full_url(token) {
        return token.to_string();
    }
    let path = token.trim_start_matches('/');
    if has_image_extension(path) {
        format!("{base}{path}")
    } else {
        format!("{base}{path}.webp")
    }
}

#[must_use]
pub fn poster_url(poster: &str) -> String {
    proxied(POSTER_PROXY_BASE, poster)
}

#[must_use]
pub fn badge_url(badge: &str) -> String {
    proxied(BADGE_PROXY_BASE, badge)
}

/// Picks the image shown for a match. First rule that applies wins:
///
/// 1. both team badges, both relative: combined poster of the pair
/// 2. `poster`
/// 3. home badge
/// 4. away badge
/// 5. the local fallback asset
///
/// Pure and total; absent or wrong-typed fields simply skip their rule.
#[must_use]
pub fn resolve_image(record: Option<&MatchRecord>) -> ResolvedImage {
    let alt = record
        .and_then(MatchRecord::display_title)
        .unwrap_or(DEFAULT_ALT)
        .to_string();
    let Some(record) = record else {
        return fallback(alt);
    };

    let home = record.home_badge();
    let away = record.away_badge();

    if let (Some(home), Some(away)) = (home, away) {
        let home = home.trim_start_matches('/');
        let away = away.trim_start_matches('/');
        if !is_full_url(home) && !is_full_url(away) {
            return ResolvedImage {
                src: format!("{COMBINED_POSTER_BASE}{home}/{away}.webp"),
                alt,
                is_external: true,
            };
        }
    }

    if let Some(poster) = record.poster.as_deref() {
        let src = poster_url(poster);
        let is_external = is_full_url(&src);
        return ResolvedImage {
            src,
            alt,
            is_external,
        };
    }

    if let Some(badge) = home.or(away) {
        return ResolvedImage {
            src: badge_url(badge),
            alt,
            is_external: true,
        };
    }

    fallback(alt)
}

fn fallback(alt: String) -> ResolvedImage {
    ResolvedImage {
        src: FALLBACK_IMAGE.to_string(),
        alt,
        is_external: false,
    }
}
