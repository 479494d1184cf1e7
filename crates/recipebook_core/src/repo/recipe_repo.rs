//! Recipe repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide ordered CRUD primitives over the recipe collection.
//! - Keep locking details inside the storage boundary.
//!
//! # Invariants
//! - Collection order is insertion order; updates keep position.
//! - Absent IDs are reported as `false`/`None`, never as errors.
//! - No duplicate-ID check on insert; callers supply fresh IDs.

use crate::model::recipe::{Recipe, RecipeId};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Repository interface for recipe collection mutations.
pub trait RecipeRepository {
    fn insert_recipe(&self, recipe: Recipe) -> RecipeId;
    /// Replaces the first record with a matching ID in place.
    fn replace_recipe(&self, recipe: &Recipe) -> bool;
    /// Removes every record with the given ID.
    fn delete_recipe(&self, id: RecipeId) -> bool;
    /// Flips `is_favorite` on the first match and returns the new value.
    fn toggle_favorite(&self, id: RecipeId) -> Option<bool>;
    fn get_recipe(&self, id: RecipeId) -> Option<Recipe>;
    fn list_recipes(&self) -> Vec<Recipe>;
    fn count(&self) -> usize;
}

/// Mutex-guarded ordered collection; state resets with the process.
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    recipes: Mutex<Vec<Recipe>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `recipes` in order.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Mutex::new(recipes),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Recipe>> {
        // Mutations are single-statement, so a poisoned collection is still
        // structurally valid.
        self.recipes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn insert_recipe(&self, recipe: Recipe) -> RecipeId {
        let id = recipe.id;
        self.lock().push(recipe);
        id
    }

    fn replace_recipe(&self, recipe: &Recipe) -> bool {
        let mut recipes = self.lock();
        match recipes.iter_mut().find(|existing| existing.id == recipe.id) {
            Some(slot) => {
                *slot = recipe.clone();
                true
            }
            None => false,
        }
    }

    fn delete_recipe(&self, id: RecipeId) -> bool {
        let mut recipes = self.lock();
        let before = recipes.len();
        recipes.retain(|recipe| recipe.id != id);
        recipes.len() != before
    }

    fn toggle_favorite(&self, id: RecipeId) -> Option<bool> {
        let mut recipes = self.lock();
        let recipe = recipes.iter_mut().find(|recipe| recipe.id == id)?;
        recipe.is_favorite = !recipe.is_favorite;
        Some(recipe.is_favorite)
    }

    fn get_recipe(&self, id: RecipeId) -> Option<Recipe> {
        self.lock().iter().find(|recipe| recipe.id == id).cloned()
    }

    fn list_recipes(&self) -> Vec<Recipe> {
        self.lock().clone()
    }

    fn count(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryRecipeRepository, RecipeRepository};
    use crate::model::recipe::Recipe;

    #[test]
    fn delete_removes_every_duplicate_id() {
        let repo = InMemoryRecipeRepository::new();
        let recipe = Recipe::new("Soup", "Hot");
        repo.insert_recipe(recipe.clone());
        repo.insert_recipe(Recipe::new("Salad", "Cold"));
        repo.insert_recipe(recipe.clone());

        assert!(repo.delete_recipe(recipe.id));
        assert_eq!(repo.count(), 1);
        assert!(!repo.delete_recipe(recipe.id));
    }

    #[test]
    fn replace_touches_first_match_only() {
        let repo = InMemoryRecipeRepository::new();
        let recipe = Recipe::new("Soup", "Hot");
        repo.insert_recipe(recipe.clone());
        repo.insert_recipe(recipe.clone());

        let mut edited = recipe.clone();
        edited.name = "Stew".to_string();
        assert!(repo.replace_recipe(&edited));

        let names = repo
            .list_recipes()
            .into_iter()
            .map(|r| r.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Stew", "Soup"]);
    }

    #[test]
    fn toggle_reports_new_flag() {
        let repo = InMemoryRecipeRepository::new();
        let id = repo.insert_recipe(Recipe::new("Soup", "Hot"));
        assert_eq!(repo.toggle_favorite(id), Some(true));
        assert_eq!(repo.toggle_favorite(id), Some(false));
    }
}
