//! Room photo upload: local preview plus `POST /prediction`.
//!
//! DESIGN
//! ======
//! The preview and the upload run as two futures joined together, so the
//! preview lands as soon as the file is decoded regardless of how long the
//! processing service takes. The loading indicator is a drop guard around the
//! upload future only; it is hidden on every exit path.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use super::{Notifier, RoomPage, RoomView};
use crate::error::ClientError;
use crate::net::api::RoomApi;

pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Please try again.";

/// Decodes a selected file into a data URL for the preview.
pub trait PreviewReader {
    type File;

    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    async fn read_data_url(&self, file: &Self::File) -> Result<String, ClientError>;
}

/// Shows the loading indicator while alive.
struct LoadingIndicator<'a, V: RoomView> {
    view: &'a V,
}

impl<'a, V: RoomView> LoadingIndicator<'a, V> {
    fn show(view: &'a V) -> Self {
        view.set_loading_visible(true);
        Self { view }
    }
}

impl<V: RoomView> Drop for LoadingIndicator<'_, V> {
    fn drop(&mut self) {
        self.view.set_loading_visible(false);
    }
}

impl<A, P, V, N, C> RoomPage<A, P, V, N, C>
where
    A: RoomApi,
    P: PreviewReader<File = A::File>,
    V: RoomView,
    N: Notifier,
{
    /// Handle a change of the upload input's selection.
    ///
    /// Only the first selected file is used; an empty selection is a no-op.
    pub async fn on_upload_change(&self, files: impl IntoIterator<Item = A::File>) {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        let ticket = self.result_image.issue();

        let preview = async {
            match self.preview.read_data_url(&file).await {
                Ok(data_url) => {
                    if !self.result_image.write(ticket, &self.view, &data_url) {
                        log::debug!("room preview superseded by a newer result");
                    }
                }
                Err(e) => {
                    log::warn!("room preview failed: {e}");
                    self.result_image.withdraw(ticket);
                }
            }
        };
        futures::join!(preview, self.upload_room(&file));
    }

    async fn upload_room(&self, file: &A::File) {
        let _loading = LoadingIndicator::show(&self.view);
        match self.api.upload_room_image(file).await {
            Ok(()) => self.view.enable_texture_panel(),
            Err(e) => {
                log::error!("room upload failed: {e}");
                self.notifier.alert(UPLOAD_FAILED_MESSAGE);
            }
        }
    }
}
