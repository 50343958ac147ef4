//! Shared utilities.
//!
//! Text helpers for the line-oriented configuration fields.

pub mod text;
