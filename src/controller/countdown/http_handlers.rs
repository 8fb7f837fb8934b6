use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;

use crate::countdown::CountdownSpec;
use crate::state::AppState;
use crate::view::countdown::{
    render_countdown_gone, render_countdown_modal, render_countdown_timer,
};

/// Posted by a countdown card (see `view::cards::countdown_vals`).
#[derive(Debug, Deserialize)]
pub struct CountdownForm {
    pub viewer: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub kickoff_ms: i64,
    #[serde(default)]
    pub image_src: String,
    #[serde(default)]
    pub alt: String,
}

impl CountdownForm {
    #[must_use]
    pub fn into_parts(self) -> (String, CountdownSpec) {
        let spec = CountdownSpec {
            title: self.title,
            kickoff_ms: self.kickoff_ms,
            image_src: self.image_src,
            alt: self.alt,
        };
        (self.viewer, spec)
    }
}

#[derive(Debug, Deserialize)]
pub struct ViewerForm {
    pub viewer: String,
}

pub async fn countdown_open(
    form: web::Form<CountdownForm>,
    state: Data<AppState>,
) -> impl Responder {
    let (viewer, spec) = form.into_inner().into_parts();
    state.countdowns.sweep_idle().await;
    let frame = state.countdowns.open(&viewer, spec.clone()).await;

    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_countdown_modal(&spec, frame, &viewer).into_string())
}

pub async fn countdown_tick(
    query: web::Query<ViewerForm>,
    state: Data<AppState>,
) -> impl Responder {
    let markup = match state.countdowns.poll(&query.viewer).await {
        Some(frame) => render_countdown_timer(frame, &query.viewer),
        None => render_countdown_gone(),
    };
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// Modal dismissed: stop the viewer's timer and clear the modal.
pub async fn countdown_close(
    form: web::Form<ViewerForm>,
    state: Data<AppState>,
) -> impl Responder {
    state.countdowns.close(&form.viewer).await;
    HttpResponse::Ok().content_type("text/html").body("")
}
