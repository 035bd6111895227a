//! `web-sys` backed page view, alert notifier and clock.
//!
//! Optional elements (`#loadingMessage`, `.texture-panel`) are looked up on
//! every call so the page host may omit them.

use web_sys::{Document, HtmlImageElement};

use crate::config::PageConfig;
use crate::handlers::{Clock, Notifier, RoomView};

pub struct DomView {
    document: Document,
    result_image: HtmlImageElement,
    loading_id: String,
    texture_panel_selector: String,
    disabled_class: String,
}

impl DomView {
    /// Resolve the result image; `None` if the page lacks it.
    pub fn new(document: Document, config: &PageConfig) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let element = document.get_element_by_id(&config.result_image_id)?;
        let Ok(result_image) = element.dyn_into::<HtmlImageElement>() else {
            log::error!("#{} is not an <img>", config.result_image_id);
            return None;
        };
        Some(Self {
            document,
            result_image,
            loading_id: config.loading_id.clone(),
            texture_panel_selector: config.texture_panel_selector.clone(),
            disabled_class: config.disabled_class.clone(),
        })
    }
}

impl RoomView for DomView {
    fn set_result_image(&self, src: &str) {
        self.result_image.set_src(src);
    }

    fn set_loading_visible(&self, visible: bool) {
        use wasm_bindgen::JsCast;

        let Some(element) = self.document.get_element_by_id(&self.loading_id) else {
            return;
        };
        let Ok(loading) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let display = if visible { "block" } else { "none" };
        if let Err(e) = loading.style().set_property("display", display) {
            log::warn!("loading indicator style update failed: {e:?}");
        }
    }

    fn enable_texture_panel(&self) {
        match self.document.query_selector(&self.texture_panel_selector) {
            Ok(Some(panel)) => {
                if let Err(e) = panel.class_list().remove_1(&self.disabled_class) {
                    log::warn!("texture panel class update failed: {e:?}");
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("invalid texture panel selector: {e:?}"),
        }
    }
}

/// Blocking `window.alert` notifier.
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("alert without window: {message}");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("alert failed ({e:?}): {message}");
        }
    }
}

/// `Date.now()` clock.
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
