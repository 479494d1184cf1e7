use recipebook_core::{filter_recipes, Recipe, RecipeStore, SearchQuery};

#[test]
fn empty_query_returns_full_collection_in_order() {
    let store = RecipeStore::with_seed_data();
    assert_eq!(store.search(""), store.list());
}

#[test]
fn salmon_query_is_case_insensitive() {
    let store = RecipeStore::with_seed_data();
    for query in ["salmon", "SALMON", "Salmon"] {
        let hits = store.search(query);
        assert_eq!(hits.len(), 1, "query `{query}`");
        assert_eq!(hits[0].name, "Grilled Salmon");
    }
}

#[test]
fn description_substring_matches_and_order_is_preserved() {
    let store = RecipeStore::with_seed_data();
    let names = store
        .search("creamy")
        .into_iter()
        .map(|r| r.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Chicken Alfredo", "Carbonara Pasta"]);
}

#[test]
fn no_match_returns_empty() {
    let store = RecipeStore::with_seed_data();
    assert!(store.search("lasagna").is_empty());
}

#[test]
fn favorites_only_query_follows_toggles() {
    let store = RecipeStore::with_seed_data();
    let favorites = SearchQuery {
        favorites_only: true,
        ..SearchQuery::default()
    };
    assert!(store.search_with(&favorites).is_empty());

    let id = store.list()[3].id;
    store.toggle_favorite(id);
    let hits = store.search_with(&favorites);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Berry Smoothie");
}

#[test]
fn unicode_case_folding() {
    let recipes = vec![Recipe::new("Crème Brûlée", "Dessert")];
    assert_eq!(filter_recipes(&recipes, "CRÈME").len(), 1);
}
