//! DOM event wiring for the room page.
//!
//! DESIGN
//! ======
//! The upload input gets a direct `change` listener. Thumbnail clicks are
//! delegated: one `click` listener on the document resolves the clicked
//! `.texture-thumb` with `Element::closest`, so thumbnails inserted after
//! load work without rebinding. Each event spawns its handler future with
//! `spawn_local` and returns immediately; listeners live for the page's
//! lifetime (`Closure::forget`).

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, File, HtmlInputElement};

use super::delegate::{Bindings, ClickNode, texture_for_click};
use super::preview::FileReaderPreview;
use super::view::{AlertNotifier, BrowserClock, DomView};
use crate::config::PageConfig;
use crate::error::ClientError;
use crate::handlers::RoomPage;
use crate::net::api::HttpRoomApi;

type BrowserPage = RoomPage<HttpRoomApi, FileReaderPreview, DomView, AlertNotifier, BrowserClock>;

impl ClickNode for Element {
    fn closest_match(&self, selector: &str) -> Result<Option<Self>, ClientError> {
        self.closest(selector).map_err(ClientError::from_js)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

/// Bind the upload and texture handlers to the current document.
///
/// Missing elements are logged and the affected handler is skipped.
pub fn bind_room_page(config: &PageConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document; room page handlers not bound");
        return;
    };
    let view = DomView::new(document.clone(), config);
    let input = upload_input(&document, config);
    let bindings = Bindings::for_page(view.is_some(), input.is_some(), config);
    let Some(view) = view else {
        return;
    };

    let page = Rc::new(RoomPage::new(
        HttpRoomApi::new(config),
        FileReaderPreview,
        view,
        AlertNotifier,
        BrowserClock,
    ));
    if let Some(input) = input.filter(|_| bindings.upload) {
        bind_upload(input, &page);
    }
    if bindings.texture_clicks {
        bind_texture_clicks(&document, config, &page);
    }
}

fn upload_input(document: &Document, config: &PageConfig) -> Option<HtmlInputElement> {
    let element = document.get_element_by_id(&config.upload_input_id)?;
    let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
        log::warn!("#{} is not an <input>", config.upload_input_id);
        return None;
    };
    Some(input)
}

fn bind_upload(input: HtmlInputElement, page: &Rc<BrowserPage>) {
    let page = Rc::clone(page);
    let target = input.clone();
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let files = selected_files(&target);
        let page = Rc::clone(&page);
        spawn_local(async move {
            page.on_upload_change(files).await;
        });
    });
    if let Err(e) = input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
        log::error!("failed to bind upload listener: {e:?}");
        return;
    }
    on_change.forget();
}

fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

fn bind_texture_clicks(document: &Document, config: &PageConfig, page: &Rc<BrowserPage>) {
    let page = Rc::clone(page);
    let config = config.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let target = event_element(&event);
        let Some(texture) = texture_for_click(target.as_ref(), &config) else {
            return;
        };
        let page = Rc::clone(&page);
        spawn_local(async move {
            page.on_texture_click(&texture).await;
        });
    });
    if let Err(e) = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::error!("failed to bind thumbnail listener: {e:?}");
        return;
    }
    on_click.forget();
}

fn event_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    let Ok(element) = target.dyn_into::<Element>() else {
        return None;
    };
    Some(element)
}
