use maud::{Markup, html};
use serde_json::json;

use super::page_href;
use crate::countdown::{CountdownFrame, CountdownSpec, STARTED_MESSAGE};
use crate::model::image::FALLBACK_IMAGE;

pub const DEFAULT_THUMB_ALT: &str = "Match Thumbnail";
pub const STARTS_IN_PREFIX: &str = "Match starts in: ";

/// Modal body swapped into `#countdownModal`.
#[must_use]
pub fn render_countdown_modal(spec: &CountdownSpec, frame: CountdownFrame, viewer: &str) -> Markup {
    let thumb = if spec.image_src.is_empty() {
        FALLBACK_IMAGE
    } else {
        spec.image_src.as_str()
    };
    let alt = if spec.alt.is_empty() {
        DEFAULT_THUMB_ALT
    } else {
        spec.alt.as_str()
    };

    html! {
        div class="modal-dialog" role="dialog" aria-modal="true" aria-labelledby="modalMatchTitle" {
            div class="modal-content" {
                div class="modal-header" {
                    h5 id="modalMatchTitle" class="modal-title" { (spec.title) }
                    button type="button" class="btn-close" aria-label="Close"
                        hx-post="countdown/close"
                        hx-vals=(json!({ "viewer": viewer }).to_string())
                        hx-target="#countdownModal"
                        hx-swap="innerHTML" {}
                }
                div class="modal-body" {
                    img id="modalMatchThumbnail" src=(thumb) alt=(alt);
                    (render_countdown_timer(frame, viewer))
                }
            }
        }
    }
}

/// The timer line. While counting it polls its own replacement every second;
/// the started message carries no trigger, so swapping it in ends polling.
#[must_use]
pub fn render_countdown_timer(frame: CountdownFrame, viewer: &str) -> Markup {
    html! {
        @if frame.is_started() {
            p id="countdownTimer" { (STARTED_MESSAGE) }
        } @else {
            p id="countdownTimer"
                hx-get=(page_href("countdown/tick", &[("viewer", viewer)]))
                hx-trigger="every 1s"
                hx-swap="outerHTML" {
                (STARTS_IN_PREFIX) (frame.to_string())
            }
        }
    }
}

/// Served to a poll whose countdown is gone (closed or swept).
#[must_use]
pub fn render_countdown_gone() -> Markup {
    html! {
        p id="countdownTimer" {}
    }
}
