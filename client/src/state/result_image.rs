//! Latest-wins arbitration for the shared result image.
//!
//! DESIGN
//! ======
//! Upload previews and texture replies both set `#imageResult`, and requests
//! are never cancelled. Each handler invocation takes a `Ticket` when it
//! starts; a write only lands if its ticket is still the most recently issued
//! one, so a slow reply can never overwrite the result of a newer action.
//!
//! TRADE-OFFS
//! ==========
//! Tickets are per slot, not per handler: a new upload also invalidates a
//! texture reply still in flight, since that reply renders the old room.
//! A writer that ends up with nothing to show withdraws its ticket, which
//! hands the slot back to the ticket it superseded.

#[cfg(test)]
#[path = "result_image_test.rs"]
mod result_image_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::handlers::RoomView;

/// Sequence number identifying one writer of the result image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket {
    id: u64,
    superseded: u64,
}

/// Shared handle issuing tickets for result-image writes.
///
/// Clones share the same counter.
#[derive(Clone, Debug, Default)]
pub struct ResultImageSlot {
    issued: Rc<Cell<u64>>,
    current: Rc<Cell<u64>>,
}

impl ResultImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket newer than every ticket issued so far.
    pub fn issue(&self) -> Ticket {
        let id = self.issued.get().wrapping_add(1);
        self.issued.set(id);
        let superseded = self.current.replace(id);
        Ticket { id, superseded }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.get() == ticket.id
    }

    /// Give up `ticket` without writing.
    ///
    /// If it is still current, the ticket it superseded becomes current again.
    /// A no-op once a newer ticket has been issued.
    pub fn withdraw(&self, ticket: Ticket) {
        if self.is_current(ticket) {
            self.current.set(ticket.superseded);
        }
    }

    /// Set the result image to `src` if `ticket` is still current.
    ///
    /// Returns whether the write happened.
    pub fn write<V: RoomView + ?Sized>(&self, ticket: Ticket, view: &V, src: &str) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        view.set_result_image(src);
        true
    }
}
