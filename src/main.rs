use streamed_football::AppState;
use streamed_football::args;
use streamed_football::controller::countdown::{countdown_close, countdown_open, countdown_tick};
use streamed_football::controller::listing::{index, matches_section};
use streamed_football::controller::player::watch;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = args::args_checks()?;
    let state = AppState::from_args(&args);
    let static_dir = args.static_dir.clone();
    let assets_dir = Path::new(&static_dir).join("assets");
    if !assets_dir.is_dir() {
        warn!("{} is missing; image fallbacks will 404", assets_dir.display());
    }

    let _sweeper = state
        .countdowns
        .spawn_sweeper(Duration::from_secs(args.countdown_idle_secs));

    let (host, port) = args.bind_addr();
    info!(api_base = %args.api_base, stream_host = %args.stream_host, "listening on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .route("/", web::get().to(index))
            .route("/matches/{section}", web::get().to(matches_section))
            .route("/watch", web::get().to(watch))
            .route("/countdown", web::post().to(countdown_open))
            .route("/countdown/tick", web::get().to(countdown_tick))
            .route("/countdown/close", web::post().to(countdown_close))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/assets", assets_dir.clone()))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((host, port))?
    .run()
    .await?;
    Ok(())
}
