//! Substring filter behind the recipe list search bar.
//!
//! # Responsibility
//! - Match recipes by name or description, case-insensitively.
//! - Apply optional favorite/meal-type narrowing.
//!
//! # Invariants
//! - Filtering is pure and order-preserving.
//! - An empty query text matches every recipe.
//! - Query text is not trimmed; whitespace is matched literally.

use crate::model::recipe::Recipe;

/// Search options for list filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// User query text, matched against name and description.
    pub text: String,
    /// Keep only favorites when `true`.
    pub favorites_only: bool,
    /// Exact meal type match, case-insensitive.
    pub meal_type: Option<String>,
}

impl SearchQuery {
    /// Creates a text-only query.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns whether `recipe` satisfies every active criterion.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if self.favorites_only && !recipe.is_favorite {
            return false;
        }
        if let Some(meal_type) = &self.meal_type {
            if recipe.meal_type.to_lowercase() != meal_type.to_lowercase() {
                return false;
            }
        }
        matches_text(recipe, &self.text)
    }
}

/// Filters `recipes` by a plain text query.
///
/// Returns the full slice in order for an empty query.
pub fn filter_recipes(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    apply_query(recipes, &SearchQuery::new(query))
}

/// Filters `recipes` by all criteria of `query`, preserving order.
pub fn apply_query(recipes: &[Recipe], query: &SearchQuery) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| query.matches(recipe))
        .cloned()
        .collect()
}

fn matches_text(recipe: &Recipe, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    recipe.name.to_lowercase().contains(&needle)
        || recipe.description.to_lowercase().contains(&needle)
}
