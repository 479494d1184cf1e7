//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the collection access contract used by the store service.
//! - Isolate locking details from service orchestration.
//!
//! # Invariants
//! - Repository APIs report absence as `false`/`None`, not as errors.

pub mod recipe_repo;
