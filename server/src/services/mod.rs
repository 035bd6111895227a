//! Filesystem-backed services used by the routes.

pub mod library;
