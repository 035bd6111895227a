//! Forwarding of the processing endpoints.
//!
//! DESIGN
//! ======
//! Bodies are forwarded as opaque bytes with their `Content-Type`, so the
//! multipart upload and the JSON texture request reach the processing
//! service unchanged. The upstream status, `Content-Type`, `Location` and
//! body come back unchanged too.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable or failing backend becomes `502` with a JSON body shaped
//! like a texture reply, so the client can show the message.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

pub const PREDICTION_PATH: &str = "/prediction";
pub const RESULT_TEXTURED_PATH: &str = "/result_textured";

pub const BACKEND_UNAVAILABLE_MESSAGE: &str = "Processing backend unavailable";

/// `POST /prediction` — multipart room photo upload.
pub async fn prediction(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    forward(&state, PREDICTION_PATH, &headers, body).await
}

/// `POST /result_textured` — JSON texture selection.
pub async fn result_textured(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    forward(&state, RESULT_TEXTURED_PATH, &headers, body).await
}

async fn forward(state: &AppState, path: &str, headers: &HeaderMap, body: Bytes) -> Response {
    let url = format!("{}{path}", state.config.backend_url);
    let mut request = state.http.post(&url).body(body);
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        request = request.header(header::CONTENT_TYPE, content_type.clone());
    }

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::warn!(error = %e, %url, "processing backend unreachable");
            return backend_unavailable();
        }
    };

    let status = upstream.status();
    let mut relayed = HeaderMap::new();
    for name in [header::CONTENT_TYPE, header::LOCATION] {
        if let Some(value) = upstream.headers().get(&name) {
            relayed.insert(name, value.clone());
        }
    }
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, %url, "processing backend response truncated");
            return backend_unavailable();
        }
    };

    tracing::debug!(%url, status = status.as_u16(), bytes = bytes.len(), "forwarded processing request");
    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = relayed;
    response
}

fn backend_unavailable() -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "state": "error", "msg": BACKEND_UNAVAILABLE_MESSAGE })),
    )
        .into_response()
}
