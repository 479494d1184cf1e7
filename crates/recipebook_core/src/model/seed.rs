//! Bootstrap sample recipes.
//!
//! Seed records get fresh IDs on every call; nothing here is persisted.

use crate::model::recipe::{Recipe, RecipeColor};

struct SeedRecipe {
    name: &'static str,
    description: &'static str,
    meal_type: &'static str,
    dietary_type: &'static str,
    ingredients: &'static [&'static str],
    icon: &'static str,
    cooking_time: &'static str,
    servings: u32,
    difficulty: &'static str,
    color: RecipeColor,
}

const SEED_RECIPES: [SeedRecipe; 6] = [
    SeedRecipe {
        name: "Grilled Salmon",
        description: "Perfectly grilled salmon with lemon and herbs",
        meal_type: "Dinner",
        dietary_type: "Gluten-Free",
        ingredients: &["Salmon fillet", "Lemon", "Olive Oil", "Fresh herbs", "Garlic"],
        icon: "flame",
        cooking_time: "25 mins",
        servings: 2,
        difficulty: "Medium",
        color: RecipeColor::Pink,
    },
    SeedRecipe {
        name: "Quinoa Buddha",
        description: "Nutritious bowl with quinoa, roasted vegetables, and tahini dressing",
        meal_type: "Lunch",
        dietary_type: "Vegan",
        ingredients: &["Quinoa", "Sweet potato", "Chickpeas", "Kale", "Tahini", "Lemon"],
        icon: "leaf.circle",
        cooking_time: "40 mins",
        servings: 2,
        difficulty: "Medium",
        color: RecipeColor::Blue,
    },
    SeedRecipe {
        name: "Chicken Alfredo",
        description: "Creamy Alfredo sauce with tender chicken and pasta",
        meal_type: "Dinner",
        dietary_type: "Non-Vegetarian",
        ingredients: &["Chicken", "Pasta", "Cream", "Parmesan Cheese", "Garlic"],
        icon: "fork.knife",
        cooking_time: "30 mins",
        servings: 3,
        difficulty: "Medium",
        color: RecipeColor::Purple,
    },
    SeedRecipe {
        name: "Berry Smoothie",
        description: "A refreshing and healthy berry smoothie",
        meal_type: "Beverage",
        dietary_type: "Vegan",
        ingredients: &["Strawberries", "Blueberries", "Banana", "Almond Milk"],
        icon: "cup.and.saucer",
        cooking_time: "5 mins",
        servings: 1,
        difficulty: "Easy",
        color: RecipeColor::Pink,
    },
    SeedRecipe {
        name: "Carbonara Pasta",
        description: "Traditional Italian pasta dish with creamy sauce",
        meal_type: "Dinner",
        dietary_type: "Non-Vegetarian",
        ingredients: &["Pasta", "Eggs", "Pancetta", "Parmesan"],
        icon: "fork.knife",
        cooking_time: "20 mins",
        servings: 2,
        difficulty: "Medium",
        color: RecipeColor::Red,
    },
    SeedRecipe {
        name: "Greek Yogurt",
        description: "Healthy and delicious Greek yogurt layered with fruits",
        meal_type: "Breakfast",
        dietary_type: "Vegetarian",
        ingredients: &["Greek Yogurt", "Granola", "Berries", "Honey"],
        icon: "cup.and.saucer",
        cooking_time: "5 mins",
        servings: 1,
        difficulty: "Easy",
        color: RecipeColor::Blue,
    },
];

/// Returns the fixed demo catalog in display order.
pub fn sample_recipes() -> Vec<Recipe> {
    SEED_RECIPES.iter().map(to_recipe).collect()
}

fn to_recipe(seed: &SeedRecipe) -> Recipe {
    let mut recipe = Recipe::new(seed.name, seed.description);
    recipe.meal_type = seed.meal_type.to_string();
    recipe.dietary_type = seed.dietary_type.to_string();
    recipe.ingredients = seed.ingredients.iter().map(|item| item.to_string()).collect();
    recipe.icon = seed.icon.to_string();
    recipe.cooking_time = seed.cooking_time.to_string();
    recipe.servings = seed.servings;
    recipe.difficulty = seed.difficulty.to_string();
    recipe.background_color = seed.color;
    recipe
}

#[cfg(test)]
mod tests {
    use super::sample_recipes;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let recipes = sample_recipes();
        let ids = recipes.iter().map(|r| r.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), recipes.len());
    }

    #[test]
    fn seed_starts_with_grilled_salmon() {
        let recipes = sample_recipes();
        assert_eq!(recipes.len(), 6);
        assert_eq!(recipes[0].name, "Grilled Salmon");
        assert!(recipes.iter().all(|r| !r.is_favorite && r.image.is_none()));
    }
}
