//! Room page interaction handlers.
//!
//! ARCHITECTURE
//! ============
//! `RoomPage` bundles the collaborators a handler touches: the processing
//! API, the file preview reader, the page view, the alert notifier and a
//! clock. `upload` and `texture` each add one async handler method with only
//! the bounds they need. The browser implementations live in `dom`; tests
//! use the recording fakes in `fakes`.
//!
//! ERROR HANDLING
//! ==============
//! Handlers are fire-and-forget: every failure ends in a log line and, where
//! the user must know, one `Notifier::alert`. Nothing is retried.

pub mod texture;
pub mod upload;

#[cfg(test)]
pub(crate) mod fakes;

use crate::state::result_image::ResultImageSlot;

/// Mutations the handlers apply to the room page.
pub trait RoomView {
    /// Set the `src` of the result image.
    fn set_result_image(&self, src: &str);
    /// Show or hide the loading indicator, if the page has one.
    fn set_loading_visible(&self, visible: bool);
    /// Remove the disabled marker from the texture panel, if the page has one.
    fn enable_texture_panel(&self);
}

/// User-facing error reporting.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Wall clock used for cache-busting parameters.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Collaborators shared by both handlers.
pub struct RoomPage<A, P, V, N, C> {
    pub api: A,
    pub preview: P,
    pub view: V,
    pub notifier: N,
    pub clock: C,
    pub result_image: ResultImageSlot,
}

impl<A, P, V, N, C> RoomPage<A, P, V, N, C> {
    pub fn new(api: A, preview: P, view: V, notifier: N, clock: C) -> Self {
        Self { api, preview, view, notifier, clock, result_image: ResultImageSlot::new() }
    }
}
