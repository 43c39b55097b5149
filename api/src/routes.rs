//! API route definitions

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// The only origin allowed to make cross-origin requests
pub const ALLOWED_ORIGIN: &str = "http://localhost:9000";

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static(ALLOWED_ORIGIN))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Players
        .route("/presences", get(handlers::players::list_players))
        .route("/players", post(handlers::players::create_player))
        .route(
            "/players/:id",
            get(handlers::players::get_player)
                .put(handlers::players::update_player)
                .delete(handlers::players::delete_player),
        )
        .route("/deleteAll", delete(handlers::players::delete_all_players))
        .fallback(handlers::not_found)
        // Layers
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
