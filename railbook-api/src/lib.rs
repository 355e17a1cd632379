use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod app_config;
pub mod state;
pub mod error;
pub mod landing;
pub mod search;
pub mod bookings;
pub mod profile;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);
    if state.config.cors.allow_any_origin {
        cors = cors.allow_origin(tower_http::cors::Any);
    }

    Router::new()
        .merge(landing::routes())
        .merge(search::routes())
        .merge(bookings::routes())
        .merge(profile::routes())
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::warn!("404: attempted to access non-existent route {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Page not found",
            "path": uri.path(),
            "home": "/",
        })),
    )
}
