//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page host serves the room page and its assets, and forwards the two
//! processing endpoints to the configured backend so the WASM client can call
//! them same-origin. Segmentation and texture rendering stay in the backend.

pub mod proxy;
pub mod room;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    Router::new()
        .route("/", get(room::index))
        .route("/room", get(room::room))
        .route(proxy::PREDICTION_PATH, post(proxy::prediction))
        .route(proxy::RESULT_TEXTURED_PATH, post(proxy::result_textured))
        .route("/healthz", get(healthz))
        .nest_service("/textures", ServeDir::new(&config.texture_dir))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
