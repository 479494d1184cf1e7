//! Recipe search entry points.
//!
//! # Responsibility
//! - Expose in-memory filtering used by list and search views.
//! - Keep result shaping inside core.

pub mod filter;
