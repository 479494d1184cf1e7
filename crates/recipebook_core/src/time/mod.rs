//! Cooking time picker values and formatting.

pub mod cooking_time;
