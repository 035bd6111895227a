//! Wire DTOs for the processing endpoints.
//!
//! DESIGN
//! ======
//! The processing service owns these shapes. Decoding is lenient: a missing
//! `state` reads as empty (never `"success"`), and `room_path`/`msg` are
//! optional, so an unexpected but well-formed JSON object becomes a rejected
//! texture rather than a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `state` value marking a successfully applied texture.
pub const STATE_SUCCESS: &str = "success";

/// Body of `POST /result_textured`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextureRequest {
    /// Texture identifier taken from the thumbnail's `data-texture`.
    pub texture: String,
}

impl TextureRequest {
    pub fn new(texture: impl Into<String>) -> Self {
        Self { texture: texture.into() }
    }
}

/// Body returned by `POST /result_textured`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TextureResponse {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub room_path: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl TextureResponse {
    pub fn is_success(&self) -> bool {
        self.state == STATE_SUCCESS
    }

    /// Server-provided message, ignoring empty strings.
    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref().filter(|m| !m.is_empty())
    }
}

/// Decoded texture response together with its HTTP status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureReply {
    pub status: u16,
    pub body: TextureResponse,
}

impl TextureReply {
    pub fn http_ok(&self) -> bool {
        crate::error::is_success_status(self.status)
    }
}
