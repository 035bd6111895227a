//! Networking modules for the processing endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `RoomApi` seam and its `gloo-net` implementation, and
//! `types` defines the JSON schema of the texture endpoint.

pub mod api;
pub mod types;
