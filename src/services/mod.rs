//! Backend-facing services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the outbound call and response normalization so route
//! handlers can stay focused on inbound validation and endpoint wiring.

pub mod relay;
