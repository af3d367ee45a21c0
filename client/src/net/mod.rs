//! Network layer: wire types and the HTTP client wrapper.

pub mod api;
pub mod types;
