//! Domain model for the recipe catalog.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Provide the demo seed catalog.
//!
//! # Invariants
//! - Every recipe is identified by a stable `RecipeId`.
//! - Deletion is a hard remove; there are no tombstones.

pub mod recipe;
pub mod seed;
