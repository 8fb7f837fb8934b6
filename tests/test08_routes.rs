mod common;

use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use actix_web::{App, test};
use common::{FakeStreamedApi, FixedClock, NOW_MS, test_state};
use scraper::{Html, Selector};
use std::sync::Arc;
use streamed_football::AppState;
use streamed_football::controller::countdown::{countdown_close, countdown_open, countdown_tick};
use streamed_football::controller::listing::{index, matches_section};
use streamed_football::controller::player::watch;
use streamed_football::controller::streamed::Listing;

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($state))
                .route("/", web::get().to(index))
                .route("/matches/{section}", web::get().to(matches_section))
                .route("/watch", web::get().to(watch))
                .route("/countdown", web::post().to(countdown_open))
                .route("/countdown/tick", web::get().to(countdown_tick))
                .route("/countdown/close", web::post().to(countdown_close)),
        )
        .await
    };
}

fn fixture_state() -> (AppState, Arc<FixedClock>) {
    let clock = FixedClock::new(NOW_MS);
    (test_state(FakeStreamedApi::with_fixtures(), clock.clone()), clock)
}

fn select<'a>(doc: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
    let selector = Selector::parse(css).expect("valid selector");
    doc.select(&selector).collect()
}

fn text(el: &scraper::ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[actix_web::test]
async fn test08_index_renders_three_sections() {
    let (state, _clock) = fixture_state();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_document(std::str::from_utf8(&body).expect("utf8"));

    let live = select(&doc, "#liveMatches a.match-card");
    assert_eq!(live.len(), 3);
    assert_eq!(live[0].value().attr("href"), Some("watch?id=arsenal-chelsea"));
    assert_eq!(select(&doc, "#liveMatches .live-badge").len(), 3);

    let upcoming = select(&doc, "#upcomingMatches div.match-card");
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].value().attr("hx-post"), Some("countdown"));
    let vals: serde_json::Value =
        serde_json::from_str(upcoming[0].value().attr("hx-vals").expect("hx-vals"))
            .expect("hx-vals is json");
    assert_eq!(vals["title"], "PSG vs Lyon");
    assert_eq!(vals["kickoff_ms"], NOW_MS + 3_600_000);
    assert!(vals["viewer"].as_str().is_some_and(|v| !v.is_empty()));

    // Popular: Arsenal carries the badge inherited from the live listing.
    let popular_live = select(&doc, "#popularMatches a.match-card");
    assert_eq!(popular_live.len(), 2);
    assert_eq!(
        popular_live[0].value().attr("data-match-id"),
        Some("arsenal-chelsea")
    );
    assert_eq!(select(&doc, "#popularMatches div.match-card").len(), 1);

    assert_eq!(select(&doc, "#countdownModal").len(), 1);
    let toggle = select(&doc, "#toggleMode");
    assert_eq!(text(&toggle[0]), "Dark Mode");
    assert!(select(&doc, "body.dark-mode").is_empty());
}

#[actix_web::test]
async fn test08_dark_theme_and_failed_sections() {
    let clock = FixedClock::new(NOW_MS);
    let api = FakeStreamedApi::with_fixtures().with_failing_listing(Listing::Football);
    let app = app!(test_state(api, clock));

    let req = test::TestRequest::get().uri("/?theme=dark").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_document(std::str::from_utf8(&body).expect("utf8"));

    assert_eq!(select(&doc, "body.dark-mode").len(), 1);
    let toggle = select(&doc, "#toggleMode");
    assert_eq!(text(&toggle[0]), "Light Mode");
    assert_eq!(toggle[0].value().attr("href"), Some("./?theme=light"));

    assert_eq!(select(&doc, "#liveMatches .match-card").len(), 3);
    assert_eq!(
        select(&doc, "#liveMatches a.match-card")[0].value().attr("href"),
        Some("watch?id=arsenal-chelsea&theme=dark")
    );
    assert_eq!(select(&doc, "#upcomingMatches .match-card").len(), 0);
    assert_eq!(select(&doc, "#upcomingMatches .htmx-indicator").len(), 1);
    assert_eq!(select(&doc, "#popularMatches .htmx-indicator").len(), 1);
}

#[actix_web::test]
async fn test08_section_fragments() {
    let (state, _clock) = fixture_state();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/matches/upcoming?viewer=v1")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_fragment(std::str::from_utf8(&body).expect("utf8"));
    let cards = select(&doc, "div.match-card");
    assert_eq!(cards.len(), 2);
    assert!(
        cards[1]
            .value()
            .attr("hx-vals")
            .is_some_and(|v| v.contains("\"viewer\":\"v1\""))
    );

    let req = test::TestRequest::get()
        .uri("/matches/live?json=1")
        .to_request();
    let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let cards = json["cards"].as_array().expect("cards array");
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[1]["action"]["kind"], "watch");
    assert_eq!(cards[1]["action"]["id"], "42");

    let req = test::TestRequest::get().uri("/matches/replays").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test08_section_fetch_failure_is_bad_gateway() {
    let clock = FixedClock::new(NOW_MS);
    let api = FakeStreamedApi::with_fixtures().with_failing_listing(Listing::Live);
    let app = app!(test_state(api, clock));

    let req = test::TestRequest::get().uri("/matches/popular").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn test08_watch_page() {
    let (state, _clock) = fixture_state();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/watch?id=arsenal-chelsea")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let doc = Html::parse_document(std::str::from_utf8(&body).expect("utf8"));

    assert_eq!(text(&select(&doc, "#matchTitle")[0]), "Arsenal vs Chelsea");
    assert_eq!(
        select(&doc, "iframe#player")[0].value().attr("src"),
        Some("https://embed.example.com/alpha/arsenal-chelsea/1")
    );
    assert!(select(&doc, "#noStream").is_empty());

    let links: Vec<&str> = select(&doc, "#otherMatches a.card")
        .iter()
        .filter_map(|a| a.value().attr("href"))
        .collect();
    assert_eq!(links, vec!["watch?id=42", "watch?id=porto-benfica"]);
}

#[actix_web::test]
async fn test08_watch_errors() {
    let (state, _clock) = fixture_state();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/watch?id=missing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    let doc = Html::parse_document(std::str::from_utf8(&body).expect("utf8"));
    let alert = select(&doc, "div.alert[role=alert]");
    assert!(text(&alert[0]).starts_with("Match not found."));

    let req = test::TestRequest::get().uri("/watch").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/watch?id=42").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_document(std::str::from_utf8(&body).expect("utf8"));
    assert_eq!(
        text(&select(&doc, "#noStream")[0]),
        "No stream available for this match."
    );
}

#[actix_web::test]
async fn test08_countdown_open_tick_close() {
    let (state, _clock) = fixture_state();
    let registry = state.countdowns.clone();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/countdown")
        .set_form([
            ("viewer", "v1"),
            ("title", "PSG vs Lyon"),
            ("kickoff_ms", "1760003600000"),
            ("image_src", "https://streamed.pk/api/images/proxy/psg-lyon.jpg"),
            ("alt", "PSG vs Lyon"),
        ])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_fragment(std::str::from_utf8(&body).expect("utf8"));
    assert_eq!(text(&select(&doc, "#modalMatchTitle")[0]), "PSG vs Lyon");
    assert_eq!(
        select(&doc, "#modalMatchThumbnail")[0].value().attr("src"),
        Some("https://streamed.pk/api/images/proxy/psg-lyon.jpg")
    );
    let timer = select(&doc, "#countdownTimer");
    assert_eq!(text(&timer[0]), "Match starts in: 1h 0m 0s");
    assert_eq!(timer[0].value().attr("hx-trigger"), Some("every 1s"));
    assert_eq!(registry.len().await, 1);

    let req = test::TestRequest::get()
        .uri("/countdown/tick?viewer=v1")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_fragment(std::str::from_utf8(&body).expect("utf8"));
    let timer = select(&doc, "#countdownTimer");
    assert!(text(&timer[0]).starts_with("Match starts in: "));
    assert_eq!(
        timer[0].value().attr("hx-get"),
        Some("countdown/tick?viewer=v1")
    );

    let req = test::TestRequest::post()
        .uri("/countdown/close")
        .set_form([("viewer", "v1")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(registry.is_empty().await);

    let req = test::TestRequest::get()
        .uri("/countdown/tick?viewer=v1")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_fragment(std::str::from_utf8(&body).expect("utf8"));
    assert_eq!(text(&select(&doc, "#countdownTimer")[0]), "");
}

#[actix_web::test]
async fn test08_countdown_for_started_match() {
    let (state, _clock) = fixture_state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/countdown")
        .set_form([("viewer", "v2"), ("title", "Old Match"), ("kickoff_ms", "0")])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_fragment(std::str::from_utf8(&body).expect("utf8"));
    let timer = select(&doc, "#countdownTimer");
    assert_eq!(text(&timer[0]), "Match Started!");
    assert!(timer[0].value().attr("hx-get").is_none());
    assert_eq!(
        select(&doc, "#modalMatchThumbnail")[0].value().attr("src"),
        Some("assets/images/logo.png")
    );

    // Polling a started countdown keeps returning the trigger-less timer.
    let req = test::TestRequest::get()
        .uri("/countdown/tick?viewer=v2")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_fragment(std::str::from_utf8(&body).expect("utf8"));
    let timer = select(&doc, "#countdownTimer");
    assert_eq!(text(&timer[0]), "Match Started!");
    assert!(timer[0].value().attr("hx-trigger").is_none());
}

#[actix_web::test]
async fn test08_dark_theme_survives_navigation() {
    let (state, _clock) = fixture_state();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/watch?id=arsenal-chelsea&theme=dark")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_document(std::str::from_utf8(&body).expect("utf8"));

    assert_eq!(select(&doc, "body.dark-mode").len(), 1);
    assert_eq!(
        select(&doc, "header.site-header > a")[0].value().attr("href"),
        Some("./?theme=dark")
    );
    let links: Vec<&str> = select(&doc, "#otherMatches a.card")
        .iter()
        .filter_map(|a| a.value().attr("href"))
        .collect();
    assert_eq!(
        links,
        vec!["watch?id=42&theme=dark", "watch?id=porto-benfica&theme=dark"]
    );

    let req = test::TestRequest::get()
        .uri("/watch?id=missing&theme=dark")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_document(std::str::from_utf8(&body).expect("utf8"));
    assert_eq!(
        select(&doc, "div.alert a")[0].value().attr("href"),
        Some("./?theme=dark")
    );

    let req = test::TestRequest::get()
        .uri("/matches/live?theme=dark")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let doc = Html::parse_fragment(std::str::from_utf8(&body).expect("utf8"));
    assert_eq!(
        select(&doc, "a.match-card")[1].value().attr("href"),
        Some("watch?id=42&theme=dark")
    );
}
