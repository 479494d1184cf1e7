//! Flutter-facing bindings for `recipebook_core`.

pub mod api;
