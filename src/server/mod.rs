use std::path::PathBuf;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::config::AppConfig;

pub mod fallback;
pub mod scan;
pub mod shell;

#[derive(Clone)]
pub struct AppState {
    pub miniapps_dir: PathBuf,
}

pub fn router(state: AppState) -> Router {
    // The scanner only guarantees that index.html exists; the bytes
    // themselves are served straight off disk.
    let miniapps_service = ServeDir::new(&state.miniapps_dir);

    Router::new()
        .route("/", get(shell::handler))
        .route("/scan", get(scan::handler))
        .nest_service("/miniapps", miniapps_service)
        .fallback(fallback::handler)
        .with_state(state)
        .layer(CorsLayer::permissive())
}

pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let state = AppState {
        miniapps_dir: config.miniapps_dir.clone(),
    };
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Super App shell listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
