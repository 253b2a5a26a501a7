//! Single binary web server: REST API for the scorer, websocket feed for viewers.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:4000 by default. Override with env: HOST, PORT, CORS_ALLOWED_ORIGINS.

use actix_cors::Cors;
use actix_web::{http::header, web::Data, App, HttpServer};
use dart_scoreboard::{api, Gateway, ServerConfig};
use std::sync::RwLock;

/// Any origin unless a list is configured.
fn cors(origins: &[String]) -> Cors {
    let base = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600);
    if origins.is_empty() {
        return base.allow_any_origin();
    }
    origins
        .iter()
        .fold(base, |cors, origin| cors.allowed_origin(origin))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);
    if !config.cors_origins.is_empty() {
        log::info!("CORS restricted to {:?}", config.cors_origins);
    }

    let state = Data::new(RwLock::new(Gateway::new()));
    let origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&origins))
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
