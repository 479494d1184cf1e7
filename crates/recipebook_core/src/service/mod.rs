//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Publish change notifications so UI/FFI layers stay consistent.

pub mod observers;
pub mod recipe_store;
