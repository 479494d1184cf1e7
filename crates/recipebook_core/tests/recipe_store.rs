use recipebook_core::{Recipe, RecipeStore, StoreEvent};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

fn recording_store(store: &RecipeStore) -> Arc<Mutex<Vec<StoreEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    store.subscribe(move |event| sink.lock().unwrap().push(*event));
    events
}

#[test]
fn new_store_is_empty_and_seeded_store_has_six() {
    assert!(RecipeStore::new().is_empty());

    let seeded = RecipeStore::with_seed_data();
    assert_eq!(seeded.len(), 6);
    assert_eq!(seeded.list()[0].name, "Grilled Salmon");
}

#[test]
fn add_then_list_contains_exactly_that_record() {
    let store = RecipeStore::with_seed_data();
    let mut recipe = Recipe::new("Miso Soup", "Light broth");
    recipe.ingredients = vec!["Miso".to_string(), "Tofu".to_string(), "Tofu".to_string()];
    recipe.servings = 3;

    let id = store.add(recipe.clone());
    assert_eq!(id, recipe.id);

    let list = store.list();
    let matches = list.iter().filter(|r| r.id == id).collect::<Vec<_>>();
    assert_eq!(matches.len(), 1);
    assert_eq!(*matches[0], recipe);
    assert_eq!(list.last(), Some(&recipe));
}

#[test]
fn update_keeps_position() {
    let store = RecipeStore::with_seed_data();
    let mut second = store.list()[1].clone();
    second.name = "Quinoa Bowl".to_string();

    assert!(store.update(&second));
    let list = store.list();
    assert_eq!(list[1], second);
    assert_eq!(list.len(), 6);
}

#[test]
fn unknown_id_operations_are_silent_noops() {
    let store = RecipeStore::with_seed_data();
    let before = store.list();
    let events = recording_store(&store);
    let stranger = Recipe::new("Ghost", "Never added");

    assert!(!store.update(&stranger));
    assert!(!store.remove(stranger.id));
    assert!(!store.toggle_favorite(Uuid::new_v4()));

    assert_eq!(store.list(), before);
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn toggle_twice_restores_flag() {
    let store = RecipeStore::with_seed_data();
    let id = store.list()[2].id;

    assert!(store.toggle_favorite(id));
    assert!(store.get(id).unwrap().is_favorite);
    assert!(store.toggle_favorite(id));
    assert!(!store.get(id).unwrap().is_favorite);
}

#[test]
fn remove_deletes_record_and_notifies_once() {
    let store = RecipeStore::with_seed_data();
    let id = store.list()[0].id;
    let events = recording_store(&store);

    assert!(store.remove(id));
    assert!(!store.remove(id));
    assert_eq!(store.len(), 5);
    assert!(store.get(id).is_none());
    assert_eq!(*events.lock().unwrap(), vec![StoreEvent::Removed(id)]);
}

#[test]
fn every_effective_mutation_notifies_in_order() {
    let store = RecipeStore::new();
    let events = recording_store(&store);

    let mut recipe = Recipe::new("Toast", "Crispy");
    let id = store.add(recipe.clone());
    recipe.servings = 2;
    store.update(&recipe);
    store.toggle_favorite(id);
    store.remove(id);

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            StoreEvent::Added(id),
            StoreEvent::Updated(id),
            StoreEvent::FavoriteToggled {
                id,
                is_favorite: true
            },
            StoreEvent::Removed(id),
        ]
    );
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let store = RecipeStore::new();
    let events = Arc::new(Mutex::new(0_u32));
    let sink = Arc::clone(&events);
    let subscription = store.subscribe(move |_| *sink.lock().unwrap() += 1);

    store.add(Recipe::new("One", "1"));
    assert!(store.unsubscribe(subscription));
    store.add(Recipe::new("Two", "2"));

    assert_eq!(*events.lock().unwrap(), 1);
}

#[test]
fn berry_smoothie_servings_update_scenario() {
    let store = RecipeStore::new();
    let mut smoothie = Recipe::new("Berry Smoothie", "A refreshing and healthy berry smoothie");
    smoothie.servings = 1;
    let id = store.add(smoothie.clone());

    smoothie.servings = 2;
    assert!(store.update(&smoothie));

    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, id);
    assert_eq!(list[0].servings, 2);
    assert_eq!(list[0].name, "Berry Smoothie");
}

#[test]
fn store_is_shareable_across_threads() {
    let store = Arc::new(RecipeStore::new());
    let handles = (0..4)
        .map(|n| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                store.add(Recipe::new(format!("Dish {n}"), "threaded"));
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.len(), 4);
}
