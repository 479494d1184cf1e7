//! Recipe store service.
//!
//! # Responsibility
//! - Act as the single source of truth for the recipe collection.
//! - Mediate every mutation and publish change notifications.
//! - Expose list/search reads for list, detail and form consumers.
//!
//! # Invariants
//! - Unknown IDs on update/remove/toggle are silent no-ops reported as
//!   `false`; they never surface as errors.
//! - Notifications fire only for effective mutations, after the collection
//!   lock is released.
//! - Log lines carry IDs only, never recipe text.

use crate::model::recipe::{Recipe, RecipeId};
use crate::model::seed::sample_recipes;
use crate::repo::recipe_repo::{InMemoryRecipeRepository, RecipeRepository};
use crate::search::filter::{apply_query, SearchQuery};
use crate::service::observers::{ObserverRegistry, StoreEvent, SubscriptionId};
use log::{debug, info};
use std::sync::Arc;

/// Observable recipe collection over a repository implementation.
pub struct RecipeStore<R: RecipeRepository = InMemoryRecipeRepository> {
    repo: R,
    observers: ObserverRegistry,
}

impl RecipeStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::with_repository(InMemoryRecipeRepository::new())
    }

    /// Creates an in-memory store pre-populated with the demo catalog.
    pub fn with_seed_data() -> Self {
        let recipes = sample_recipes();
        info!(
            "event=store_seed module=store status=ok count={}",
            recipes.len()
        );
        Self::with_repository(InMemoryRecipeRepository::with_recipes(recipes))
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RecipeRepository> RecipeStore<R> {
    /// Creates a store over the provided repository implementation.
    pub fn with_repository(repo: R) -> Self {
        Self {
            repo,
            observers: ObserverRegistry::new(),
        }
    }

    /// Returns a snapshot of every recipe in store order.
    pub fn list(&self) -> Vec<Recipe> {
        self.repo.list_recipes()
    }

    /// Gets one recipe by ID.
    pub fn get(&self, id: RecipeId) -> Option<Recipe> {
        self.repo.get_recipe(id)
    }

    pub fn len(&self) -> usize {
        self.repo.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a recipe to the end of the collection.
    ///
    /// # Contract
    /// - No duplicate-ID check; callers supply a fresh ID.
    /// - Always publishes `StoreEvent::Added`.
    pub fn add(&self, recipe: Recipe) -> RecipeId {
        let id = self.repo.insert_recipe(recipe);
        self.publish(StoreEvent::Added(id));
        id
    }

    /// Replaces the record with a matching ID, keeping its position.
    ///
    /// Returns `false` and publishes nothing when the ID is absent.
    pub fn update(&self, recipe: &Recipe) -> bool {
        let replaced = self.repo.replace_recipe(recipe);
        self.finish(replaced, StoreEvent::Updated(recipe.id))
    }

    /// Removes every record with `id`.
    ///
    /// Returns `false` and publishes nothing when the ID is absent.
    pub fn remove(&self, id: RecipeId) -> bool {
        let removed = self.repo.delete_recipe(id);
        self.finish(removed, StoreEvent::Removed(id))
    }

    /// Flips the favorite flag of the record with `id`.
    ///
    /// Returns `false` and publishes nothing when the ID is absent.
    pub fn toggle_favorite(&self, id: RecipeId) -> bool {
        match self.repo.toggle_favorite(id) {
            Some(is_favorite) => {
                self.publish(StoreEvent::FavoriteToggled { id, is_favorite });
                true
            }
            None => {
                log_noop("recipe_toggle_favorite", id);
                false
            }
        }
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// An empty query returns the full collection in store order.
    pub fn search(&self, query: &str) -> Vec<Recipe> {
        self.search_with(&SearchQuery::new(query))
    }

    /// Searches with favorite/meal-type narrowing.
    pub fn search_with(&self, query: &SearchQuery) -> Vec<Recipe> {
        apply_query(&self.repo.list_recipes(), query)
    }

    /// Registers a change listener.
    ///
    /// Listeners run synchronously on the mutating thread.
    pub fn subscribe(
        &self,
        listener: impl Fn(&StoreEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(Arc::new(listener))
    }

    /// Removes a change listener. Returns `false` for unknown IDs.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn finish(&self, changed: bool, event: StoreEvent) -> bool {
        if changed {
            self.publish(event);
        } else {
            log_noop(event.name(), event.recipe_id());
        }
        changed
    }

    fn publish(&self, event: StoreEvent) {
        info!(
            "event={} module=store status=ok id={}",
            event.name(),
            event.recipe_id()
        );
        self.observers.notify(&event);
    }
}

fn log_noop(event: &str, id: RecipeId) {
    debug!("event={event} module=store status=noop reason=not_found id={id}");
}

#[cfg(test)]
mod tests {
    use super::RecipeStore;
    use crate::model::recipe::Recipe;
    use crate::service::observers::StoreEvent;
    use std::sync::{Arc, Mutex};

    #[test]
    fn listener_may_read_store_reentrantly() {
        let store = Arc::new(RecipeStore::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let reader = Arc::clone(&store);
        let sink = Arc::clone(&seen);
        store.subscribe(move |_| sink.lock().unwrap().push(reader.len()));

        store.add(Recipe::new("Soup", "Hot"));
        store.add(Recipe::new("Salad", "Cold"));
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn toggle_event_carries_new_flag() {
        let store = RecipeStore::new();
        let id = store.add(Recipe::new("Soup", "Hot"));
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        store.subscribe(move |event| sink.lock().unwrap().push(*event));

        assert!(store.toggle_favorite(id));
        assert_eq!(
            *events.lock().unwrap(),
            vec![StoreEvent::FavoriteToggled {
                id,
                is_favorite: true
            }]
        );
    }
}
