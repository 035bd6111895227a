//! What a page event means, independent of `web-sys`.
//!
//! DESIGN
//! ======
//! `bind` does the plumbing: listeners, `spawn_local`, element lookups. The
//! decisions it acts on live here behind the `ClickNode` seam so they build
//! and test natively. Thumbnail clicks are resolved from the event target
//! upward, so a thumbnail needs no listener of its own and ones inserted
//! after load behave like the rest.

#[cfg(test)]
#[path = "delegate_test.rs"]
mod delegate_test;

use crate::config::PageConfig;
use crate::error::ClientError;

/// The slice of `Element` a delegated click needs.
pub trait ClickNode: Sized {
    /// Nearest inclusive ancestor matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns an error if `selector` is not a valid CSS selector.
    fn closest_match(&self, selector: &str) -> Result<Option<Self>, ClientError>;

    fn attribute(&self, name: &str) -> Option<String>;
}

/// Texture identifier for a click on `target`, if it hit a usable thumbnail.
///
/// A thumbnail without the texture attribute is logged and ignored.
pub fn texture_for_click<N: ClickNode>(target: Option<&N>, config: &PageConfig) -> Option<String> {
    let thumb = match target?.closest_match(&config.thumbnail_selector) {
        Ok(thumb) => thumb?,
        Err(e) => {
            log::warn!("invalid thumbnail selector {}: {e}", config.thumbnail_selector);
            return None;
        }
    };
    let texture = thumb.attribute(&config.texture_attribute);
    if texture.is_none() {
        log::warn!("thumbnail without {} ignored", config.texture_attribute);
    }
    texture
}

/// Which handlers the current page can support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bindings {
    pub upload: bool,
    pub texture_clicks: bool,
}

impl Bindings {
    /// Both handlers render into the result image, so without it nothing is
    /// bound. A missing upload input only disables uploads.
    pub fn for_page(has_result_image: bool, has_upload_input: bool, config: &PageConfig) -> Self {
        if !has_result_image {
            log::error!("#{} missing; room page handlers not bound", config.result_image_id);
            return Self { upload: false, texture_clicks: false };
        }
        if !has_upload_input {
            log::warn!("#{} missing; uploads disabled", config.upload_input_id);
        }
        Self { upload: has_upload_input, texture_clicks: true }
    }
}
