//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render static storefront chrome. They hold no business logic;
//! anything user-specific is read from the auth store in Leptos context.

pub mod how_it_works;
pub mod logo;
