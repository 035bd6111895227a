//! Browser side of the room page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `delegate` holds the event decisions and builds everywhere. The rest is
//! hydrate-only: `view` adapts `web-sys` elements to `RoomView`, `Notifier`
//! and `Clock`; `preview` wraps `FileReader`; `bind` wires DOM events to the
//! handlers in `crate::handlers`.

#[cfg(feature = "hydrate")]
pub mod bind;
pub mod delegate;
#[cfg(feature = "hydrate")]
pub mod preview;
#[cfg(feature = "hydrate")]
pub mod view;
