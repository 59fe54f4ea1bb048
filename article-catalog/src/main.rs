//! Article Catalog Service — in-memory article store with tag + date search.
//!
//! Endpoints:
//!   POST /articles                 create an article
//!   GET  /articles/:article_id     fetch an article by 1-based position
//!   GET  /tag/:tag_name/:date      tag search for a compact YYYYMMDD date
//!   GET  /status                   service status
//!
//! Default: http://0.0.0.0:8080/

mod catalog;
mod config;
mod routes;

use catalog::{Catalog, sample_article};
use config::Config;
use routes::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    let catalog = Catalog::new();
    if config.seed_sample_article {
        let article = catalog.create_article(sample_article());
        log::info!("Seeded sample article {} ({:?})", article.id, article.tags);
    }

    let state = Arc::new(AppState::new(catalog));

    let cors = tower_http::cors::CorsLayer::permissive();
    let app = routes::router(state).layer(cors);

    let addr = config.bind_addr();
    log::info!("Article Catalog Service listening on http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
