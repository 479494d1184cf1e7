//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `recipebook_core` linkage.
//! - Print the seeded catalog, optionally filtered by one query argument.

use recipebook_core::RecipeStore;

fn main() {
    println!("recipebook_core ping={}", recipebook_core::ping());
    println!("recipebook_core version={}", recipebook_core::core_version());

    let query = std::env::args().nth(1).unwrap_or_default();
    let store = RecipeStore::with_seed_data();
    let hits = store.search(&query);
    println!("recipes matched={} total={}", hits.len(), store.len());
    for recipe in hits {
        let marker = if recipe.is_favorite { "*" } else { "-" };
        println!(
            "{marker} {} [{} / {}] {} serves {}",
            recipe.name, recipe.meal_type, recipe.difficulty, recipe.cooking_time, recipe.servings
        );
    }
}
