//! Room visualizer page.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Redirect};

use crate::services::library;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "room.html")]
struct RoomTemplate {
    /// Image shown in `#imageResult`; empty before the first upload.
    room_image: String,
    textures: Vec<String>,
    panel_enabled: bool,
}

/// `GET /` — the room page is the only page.
pub async fn index() -> Redirect {
    Redirect::temporary("/room")
}

/// `GET /room` — render the page with the texture library and the latest
/// room image.
pub async fn room(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let textures = match library::list_textures(&state.config.texture_dir).await {
        Ok(textures) => textures,
        Err(e) => {
            tracing::warn!(
                error = %e,
                dir = %state.config.texture_dir.display(),
                "texture library unreadable; rendering empty panel"
            );
            Vec::new()
        }
    };
    let room_image = library::current_room_image(&state.config.static_dir).await;

    let page = RoomTemplate {
        room_image: room_image.unwrap_or_default().to_string(),
        textures,
        panel_enabled: room_image.is_some(),
    };
    page.render().map(Html).map_err(|e| {
        tracing::error!(error = %e, "room template render failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
