//! HTTP calls to the processing endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds only see the `RoomApi` trait, which tests implement with
//! scripted fakes.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx upload is `ClientError::Status`. The texture call returns the
//! status alongside the decoded body because a non-2xx texture reply still
//! carries a user-facing `msg`; only transport and decoding failures are
//! errors there.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{TextureReply, TextureRequest};
use crate::error::ClientError;

/// The two processing endpoints, as seen by the handlers.
pub trait RoomApi {
    /// Browser file handle carried by upload events.
    type File;

    /// `POST` the room photo as multipart field `image`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Status` for non-2xx replies and
    /// `ClientError::Transport` when the request never completes.
    async fn upload_room_image(&self, file: &Self::File) -> Result<(), ClientError>;

    /// `POST` a texture selection as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` or `ClientError::Decode`; HTTP status
    /// failures are reported through [`TextureReply::status`].
    async fn apply_texture(&self, request: &TextureRequest) -> Result<TextureReply, ClientError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> ClientError {
    ClientError::Transport(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_status_result(status: u16) -> Result<(), ClientError> {
    if crate::error::is_success_status(status) {
        Ok(())
    } else {
        Err(ClientError::Status(status))
    }
}

/// `gloo-net` implementation of [`RoomApi`].
#[cfg(feature = "hydrate")]
pub struct HttpRoomApi {
    upload_endpoint: String,
    texture_endpoint: String,
}

#[cfg(feature = "hydrate")]
impl HttpRoomApi {
    pub fn new(config: &crate::config::PageConfig) -> Self {
        Self {
            upload_endpoint: config.upload_endpoint.clone(),
            texture_endpoint: config.texture_endpoint.clone(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl RoomApi for HttpRoomApi {
    type File = web_sys::File;

    async fn upload_room_image(&self, file: &web_sys::File) -> Result<(), ClientError> {
        let form = web_sys::FormData::new().map_err(ClientError::from_js)?;
        form.append_with_blob_and_filename(crate::config::UPLOAD_FIELD, file, &file.name())
            .map_err(ClientError::from_js)?;

        let resp = gloo_net::http::Request::post(&self.upload_endpoint)
            .body(form)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        upload_status_result(resp.status())
    }

    async fn apply_texture(&self, request: &TextureRequest) -> Result<TextureReply, ClientError> {
        let resp = gloo_net::http::Request::post(&self.texture_endpoint)
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        let status = resp.status();
        let body = resp
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(TextureReply { status, body })
    }
}
