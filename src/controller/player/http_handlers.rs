use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::error;

use super::data_service::{PlayerOutcome, load_player};
use crate::state::AppState;
use crate::view::player::{render_not_found_template, render_player_template};
use crate::view::theme::Theme;

pub async fn watch(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let theme = Theme::from_query(query.get("theme").map(String::as_str));
    let match_id = query.get("id").map(|s| s.trim()).unwrap_or_default();
    if match_id.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "id parameter is required"}));
    }

    match load_player(state.api.as_ref(), match_id).await {
        Ok(PlayerOutcome::Found(page)) => HttpResponse::Ok()
            .content_type("text/html")
            .body(render_player_template(&page, theme).into_string()),
        Ok(PlayerOutcome::NotFound { match_id }) => HttpResponse::NotFound()
            .content_type("text/html")
            .body(render_not_found_template(&match_id, theme).into_string()),
        Err(e) => {
            error!(match_id, "Fetch error: {e}");
            HttpResponse::BadGateway().json(json!({"error": e.to_string()}))
        }
    }
}
