//! Client-side state shared between handlers.
//!
//! DESIGN
//! ======
//! The handlers are otherwise independent; `result_image` is the one piece of
//! page state both of them write.

pub mod result_image;
