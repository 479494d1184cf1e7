//! Form-boundary state for recipe creation and editing.

pub mod recipe_form;
