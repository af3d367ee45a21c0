//! Cross-cutting client helpers.

pub mod storage;
