//! # walltex-client
//!
//! WASM frontend for the room wall-texture visualizer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page host renders the room page; this crate attaches behavior to it.
//! Two independent handlers live in `handlers`: the room upload (preview +
//! `POST /prediction`) and the texture click (`POST /result_textured`).
//! Browser glue (`dom` apart from its event decisions, the `gloo-net` API
//! client and the entry point) is gated behind the `hydrate` feature so
//! handler logic builds and tests natively against fake collaborators.

pub mod config;
pub mod dom;
pub mod error;
pub mod handlers;
pub mod net;
pub mod state;

/// WASM entry point: initialize logging and bind the room page handlers.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    dom::bind::bind_room_page(&config::PageConfig::default());
}
