//! Core domain logic for the recipe book.
//! This crate is the single source of truth for catalog state.

pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod time;

pub use form::recipe_form::{FormError, RecipeDraft};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::recipe::{
    Recipe, RecipeColor, RecipeId, RecipeImage, DIETARY_TYPES, DIFFICULTIES, MEAL_TYPES,
};
pub use model::seed::sample_recipes;
pub use repo::recipe_repo::{InMemoryRecipeRepository, RecipeRepository};
pub use search::filter::{filter_recipes, SearchQuery};
pub use service::observers::{StoreEvent, SubscriptionId};
pub use service::recipe_store::RecipeStore;
pub use time::cooking_time::{
    format_cooking_time, parse_cooking_time, CookingTime, CookingTimeError, TimePreset,
    TimePresetParseError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
