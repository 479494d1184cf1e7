//! In-process change listener registry.
//!
//! # Invariants
//! - Listeners are invoked in registration order.
//! - Subscription IDs are never reused within one registry.

use crate::model::recipe::RecipeId;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Change notification published after every effective mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(RecipeId),
    Updated(RecipeId),
    Removed(RecipeId),
    FavoriteToggled { id: RecipeId, is_favorite: bool },
}

impl StoreEvent {
    /// ID of the recipe the event refers to.
    pub fn recipe_id(&self) -> RecipeId {
        match self {
            Self::Added(id) | Self::Updated(id) | Self::Removed(id) => *id,
            Self::FavoriteToggled { id, .. } => *id,
        }
    }

    /// Stable event name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Added(_) => "recipe_add",
            Self::Updated(_) => "recipe_update",
            Self::Removed(_) => "recipe_remove",
            Self::FavoriteToggled { .. } => "recipe_toggle_favorite",
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Listener callback type.
pub type StoreListener = dyn Fn(&StoreEvent) + Send + Sync;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: BTreeMap<SubscriptionId, Arc<StoreListener>>,
}

/// Listener registry shared by one store instance.
#[derive(Default)]
pub struct ObserverRegistry {
    inner: Mutex<Listeners>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one listener.
    pub fn subscribe(&self, listener: Arc<StoreListener>) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.entries.insert(id, listener);
        id
    }

    /// Removes one listener. Returns `false` for unknown IDs.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().entries.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Delivers `event` to a snapshot of current listeners.
    ///
    /// The registry lock is released before callbacks run, so listeners may
    /// subscribe or unsubscribe re-entrantly.
    pub fn notify(&self, event: &StoreEvent) {
        let snapshot = self.lock().entries.values().cloned().collect::<Vec<_>>();
        for listener in snapshot {
            listener(event);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Listeners> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
