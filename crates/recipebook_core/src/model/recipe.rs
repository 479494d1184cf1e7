//! Recipe domain model.
//!
//! # Responsibility
//! - Define the canonical recipe record owned by the store.
//! - Provide decoupled color and image values for presentation layers.
//!
//! # Invariants
//! - `id` is stable and never reused for another recipe.
//! - Categorical fields are free text; catalogs below list the values the
//!   form offers, but the store accepts anything.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every recipe record.
pub type RecipeId = Uuid;

/// Meal categories offered by the recipe form.
pub const MEAL_TYPES: [&str; 5] = ["Breakfast", "Lunch", "Dinner", "Dessert", "Snack"];

/// Dietary categories offered by the recipe form.
pub const DIETARY_TYPES: [&str; 6] = [
    "None",
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Dairy-Free",
    "Keto",
];

/// Difficulty levels offered by the recipe form.
pub const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

/// Fallback icon used when a recipe has no custom image.
pub const DEFAULT_ICON: &str = "fork.knife";

/// Semantic background color, independent of any rendering toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeColor {
    #[default]
    Orange,
    Pink,
    Blue,
    Green,
    Purple,
    Red,
    /// Arbitrary color picked by the user.
    Rgb(u8, u8, u8),
}

impl RecipeColor {
    /// Palette offered to new recipes.
    pub const PALETTE: [RecipeColor; 5] = [
        RecipeColor::Orange,
        RecipeColor::Pink,
        RecipeColor::Blue,
        RecipeColor::Green,
        RecipeColor::Purple,
    ];

    /// Returns the color as an sRGB triple.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Orange => (255, 149, 0),
            Self::Pink => (255, 45, 85),
            Self::Blue => (0, 122, 255),
            Self::Green => (52, 199, 89),
            Self::Purple => (175, 82, 222),
            Self::Red => (255, 59, 48),
            Self::Rgb(r, g, b) => (r, g, b),
        }
    }
}

/// Custom recipe image. Opaque to the store.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeImage {
    /// Encoded image payload as returned by the picker.
    Bytes(Vec<u8>),
    /// Reference to an image held elsewhere (path or URI).
    Reference(String),
}

impl std::fmt::Debug for RecipeImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Reference(reference) => f.debug_tuple("Reference").field(reference).finish(),
        }
    }
}

/// Canonical catalog record describing one dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    pub meal_type: String,
    pub dietary_type: String,
    /// Display order is insertion order; duplicates allowed.
    pub ingredients: Vec<String>,
    /// Symbolic icon shown when `image` is absent.
    pub icon: String,
    /// Display string such as `30 mins` or `1h 30m`.
    pub cooking_time: String,
    pub servings: u32,
    pub difficulty: String,
    pub is_favorite: bool,
    pub background_color: RecipeColor,
    pub image: Option<RecipeImage>,
}

impl Recipe {
    /// Creates a recipe with a generated stable ID and form defaults.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, description)
    }

    /// Creates a recipe with a caller-provided ID.
    ///
    /// Used by edit flows where identity already exists.
    pub fn with_id(
        id: RecipeId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            meal_type: MEAL_TYPES[0].to_string(),
            dietary_type: DIETARY_TYPES[0].to_string(),
            ingredients: Vec::new(),
            icon: DEFAULT_ICON.to_string(),
            cooking_time: String::new(),
            servings: 1,
            difficulty: DIFFICULTIES[0].to_string(),
            is_favorite: false,
            background_color: RecipeColor::default(),
            image: None,
        }
    }

    /// Returns whether a custom image replaces the icon-plus-color fallback.
    pub fn has_custom_image(&self) -> bool {
        self.image.is_some()
    }
}
