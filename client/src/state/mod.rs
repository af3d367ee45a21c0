//! Client-side application state.

pub mod auth;
