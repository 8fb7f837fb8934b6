use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::error;

use super::data_service::{Section, load_listing, load_section};
use crate::countdown::new_viewer_id;
use crate::state::AppState;
use crate::view::cards::render_card_list;
use crate::view::index::render_index_template;
use crate::view::theme::Theme;

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let theme = Theme::from_query(query.get("theme").map(String::as_str));
    let page = load_listing(state.api.as_ref(), state.clock.now_ms()).await;
    let viewer = new_viewer_id();

    let markup = render_index_template(&page, theme, &viewer);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// One listing section as an html fragment, or as card models with `json=1`.
pub async fn matches_section(
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let Some(section) = Section::parse(path.as_str()) else {
        return HttpResponse::NotFound()
            .json(json!({"error": format!("unknown section '{}'", path.as_str())}));
    };

    let json = match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    };
    let viewer = query.get("viewer").cloned().unwrap_or_else(new_viewer_id);
    let theme = Theme::from_query(query.get("theme").map(String::as_str));

    match load_section(state.api.as_ref(), section, state.clock.now_ms()).await {
        Ok(list) => {
            if json {
                HttpResponse::Ok().json(list)
            } else {
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(render_card_list(&list, &viewer, theme).into_string())
            }
        }
        Err(e) => {
            error!(section = section.container_id(), "Fetch error: {e}");
            HttpResponse::BadGateway().json(json!({"error": e.to_string()}))
        }
    }
}
