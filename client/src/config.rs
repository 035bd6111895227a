//! Room page DOM contract and endpoint paths.
//!
//! DESIGN
//! ======
//! The page host renders these ids and classes; the client only looks them
//! up. Keeping them in one struct lets tests and alternate page layouts swap
//! the contract without touching handler code.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const UPLOAD_ENDPOINT: &str = "/prediction";
pub const TEXTURE_ENDPOINT: &str = "/result_textured";

/// Multipart field carrying the room photo.
pub const UPLOAD_FIELD: &str = "image";

/// Element ids, selectors and endpoints the room page handlers depend on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Id of the `<input type="file">` that triggers uploads.
    pub upload_input_id: String,
    /// Id of the `<img>` showing the preview and textured result.
    pub result_image_id: String,
    /// Id of the optional loading indicator.
    pub loading_id: String,
    /// Selector of the optional texture panel.
    pub texture_panel_selector: String,
    /// Class toggled on the texture panel until a room is uploaded.
    pub disabled_class: String,
    /// Selector matching clickable thumbnails.
    pub thumbnail_selector: String,
    /// Data attribute holding a thumbnail's texture identifier.
    pub texture_attribute: String,
    pub upload_endpoint: String,
    pub texture_endpoint: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            upload_input_id: "upload".to_owned(),
            result_image_id: "imageResult".to_owned(),
            loading_id: "loadingMessage".to_owned(),
            texture_panel_selector: ".texture-panel".to_owned(),
            disabled_class: "disabled".to_owned(),
            thumbnail_selector: ".texture-thumb".to_owned(),
            texture_attribute: "data-texture".to_owned(),
            upload_endpoint: UPLOAD_ENDPOINT.to_owned(),
            texture_endpoint: TEXTURE_ENDPOINT.to_owned(),
        }
    }
}
