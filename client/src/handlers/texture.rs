//! Texture selection: `POST /result_textured` and result image swap.

#[cfg(test)]
#[path = "texture_test.rs"]
mod texture_test;

use super::{Clock, Notifier, RoomPage, RoomView};
use crate::net::api::RoomApi;
use crate::net::types::{TextureReply, TextureRequest};

pub const TEXTURE_REJECTED_MESSAGE: &str = "Texture could not be applied";
pub const TEXTURE_NETWORK_MESSAGE: &str = "Network error while applying texture";

/// What a decoded texture reply asks the page to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextureOutcome {
    /// Show the re-rendered room at `room_path`.
    Applied { room_path: String },
    /// Tell the user why the texture was not applied.
    Rejected { message: String },
}

/// Classify a texture reply.
///
/// Success needs a 2xx status, `state == "success"` and a non-empty
/// `room_path`. Anything else is rejected with the server's `msg` when it
/// has one.
pub fn classify(reply: &TextureReply) -> TextureOutcome {
    if reply.http_ok() && reply.body.is_success() {
        if let Some(room_path) = reply.body.room_path.as_deref().filter(|p| !p.is_empty()) {
            return TextureOutcome::Applied { room_path: room_path.to_owned() };
        }
    }
    let message = reply.body.message().unwrap_or(TEXTURE_REJECTED_MESSAGE);
    TextureOutcome::Rejected { message: message.to_owned() }
}

/// Append a `t=<millis>` cache-busting parameter to `path`.
pub fn cache_busted(path: &str, millis: u64) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}t={millis}")
}

impl<A, P, V, N, C> RoomPage<A, P, V, N, C>
where
    A: RoomApi,
    V: RoomView,
    N: Notifier,
    C: Clock,
{
    /// Handle a click on the thumbnail for `texture`.
    pub async fn on_texture_click(&self, texture: &str) {
        log::info!("texture clicked: {texture}");
        let ticket = self.result_image.issue();

        let reply = match self.api.apply_texture(&TextureRequest::new(texture)).await {
            Ok(reply) => reply,
            Err(e) => {
                log::error!("texture request failed: {e}");
                self.notifier.alert(TEXTURE_NETWORK_MESSAGE);
                return;
            }
        };

        match classify(&reply) {
            TextureOutcome::Applied { room_path } => {
                let src = cache_busted(&room_path, self.clock.now_millis());
                if !self.result_image.write(ticket, &self.view, &src) {
                    log::debug!("discarding stale texture result for {texture}");
                }
            }
            TextureOutcome::Rejected { message } => {
                log::warn!("texture {texture} rejected (status {}): {message}", reply.status);
                self.notifier.alert(&message);
            }
        }
    }
}
