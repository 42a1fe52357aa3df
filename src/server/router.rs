use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::server::state::AppState;
use crate::server::{handlers, health};

/// Create the main router with all routes.
pub fn build_router(state: AppState) -> Router {
    let public_dir = state.config().server.public_dir.clone();

    Router::new()
        .route("/", get(handlers::index))
        .route("/nft", get(handlers::nft_page))
        .route("/api/buyers", get(handlers::buyers))
        .route("/health", get(health::health))
        .nest_service("/public", ServeDir::new(public_dir))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
