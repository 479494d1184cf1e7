//! Add/edit form state and save gating.
//!
//! # Responsibility
//! - Hold uncommitted field values for one add or edit session.
//! - Gate saving on required fields and build the committed record.
//!
//! # Invariants
//! - Nothing reaches the store before `save`.
//! - Editing reuses the original ID and favorite flag.
//! - Presence checks live here, not in the store.

use crate::model::recipe::{
    Recipe, RecipeColor, RecipeId, RecipeImage, DEFAULT_ICON, DIETARY_TYPES, DIFFICULTIES,
    MEAL_TYPES,
};
use crate::repo::recipe_repo::RecipeRepository;
use crate::service::recipe_store::RecipeStore;
use crate::time::cooking_time::{parse_cooking_time, CookingTime};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Reason a draft cannot be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingName,
    MissingDescription,
    MissingIngredients,
    MissingCookingTime,
    MissingServings,
    /// Servings text is not a positive integer.
    InvalidServings(String),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "recipe name is required"),
            Self::MissingDescription => write!(f, "recipe description is required"),
            Self::MissingIngredients => write!(f, "at least one ingredient is required"),
            Self::MissingCookingTime => write!(f, "cooking time is required"),
            Self::MissingServings => write!(f, "servings is required"),
            Self::InvalidServings(value) => {
                write!(f, "servings must be a positive number, got `{value}`")
            }
        }
    }
}

impl Error for FormError {}

/// Form-local recipe values for one add or edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub meal_type: String,
    pub dietary_type: String,
    pub cooking_time: String,
    /// Raw servings text as typed.
    pub servings: String,
    /// Pending ingredient input, committed by `add_ingredient`.
    pub current_ingredient: String,
    pub ingredients: Vec<String>,
    pub image: Option<RecipeImage>,
    pub difficulty: String,
    pub background_color: RecipeColor,
    editing: Option<Recipe>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            meal_type: MEAL_TYPES[0].to_string(),
            dietary_type: DIETARY_TYPES[0].to_string(),
            cooking_time: String::new(),
            servings: String::new(),
            current_ingredient: String::new(),
            ingredients: Vec::new(),
            image: None,
            difficulty: DIFFICULTIES[0].to_string(),
            background_color: RecipeColor::default(),
            editing: None,
        }
    }
}

impl RecipeDraft {
    /// Creates an empty draft for the add flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft pre-populated from an existing record.
    pub fn edit(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            meal_type: recipe.meal_type.clone(),
            dietary_type: recipe.dietary_type.clone(),
            cooking_time: recipe.cooking_time.clone(),
            servings: recipe.servings.to_string(),
            current_ingredient: String::new(),
            ingredients: recipe.ingredients.clone(),
            image: recipe.image.clone(),
            difficulty: recipe.difficulty.clone(),
            background_color: recipe.background_color,
            editing: Some(recipe.clone()),
        }
    }

    /// Returns the ID of the record being edited, if any.
    pub fn editing_id(&self) -> Option<RecipeId> {
        self.editing.as_ref().map(|recipe| recipe.id)
    }

    /// Commits the pending ingredient input.
    ///
    /// Returns `false` and keeps the list unchanged for empty input.
    pub fn add_ingredient(&mut self) -> bool {
        if self.current_ingredient.is_empty() {
            return false;
        }
        self.ingredients.push(std::mem::take(&mut self.current_ingredient));
        true
    }

    /// Removes the ingredient at `index`, if present.
    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        if index < self.ingredients.len() {
            Some(self.ingredients.remove(index))
        } else {
            None
        }
    }

    /// Sets the cooking time from a picker value.
    pub fn set_cooking_time(&mut self, time: CookingTime) {
        self.cooking_time = time.to_string();
    }

    /// Picker value matching the current cooking time, when parseable.
    pub fn picker_value(&self) -> Option<CookingTime> {
        parse_cooking_time(&self.cooking_time)
    }

    /// Checks required fields in form order.
    ///
    /// # Errors
    /// - Returns the first missing or malformed field.
    pub fn validate(&self) -> Result<(), FormError> {
        self.check_fields().map(|_| ())
    }

    /// Returns whether the save action should be enabled.
    pub fn can_save(&self) -> bool {
        self.validate().is_ok()
    }

    /// Builds the record to commit.
    ///
    /// Editing keeps the original ID, favorite flag and icon; adding
    /// generates a fresh ID.
    pub fn build(&self) -> Result<Recipe, FormError> {
        let servings = self.check_fields()?;
        let (id, is_favorite, icon) = match &self.editing {
            Some(original) => (original.id, original.is_favorite, original.icon.clone()),
            None => (Uuid::new_v4(), false, DEFAULT_ICON.to_string()),
        };

        Ok(Recipe {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            meal_type: self.meal_type.clone(),
            dietary_type: self.dietary_type.clone(),
            ingredients: self.ingredients.clone(),
            icon,
            cooking_time: self.cooking_time.clone(),
            servings,
            difficulty: self.difficulty.clone(),
            is_favorite,
            background_color: self.background_color,
            image: self.image.clone(),
        })
    }

    /// Commits the draft: `update` when editing, `add` otherwise.
    ///
    /// An edit whose original record was deleted meanwhile is a silent
    /// no-op in the store; the original ID is still returned.
    pub fn save<R: RecipeRepository>(
        &self,
        store: &RecipeStore<R>,
    ) -> Result<RecipeId, FormError> {
        let recipe = self.build()?;
        if self.editing.is_some() {
            let id = recipe.id;
            store.update(&recipe);
            Ok(id)
        } else {
            Ok(store.add(recipe))
        }
    }

    /// Returns parsed servings once every required field is present.
    fn check_fields(&self) -> Result<u32, FormError> {
        if self.name.is_empty() {
            return Err(FormError::MissingName);
        }
        if self.description.is_empty() {
            return Err(FormError::MissingDescription);
        }
        if self.ingredients.is_empty() {
            return Err(FormError::MissingIngredients);
        }
        if self.cooking_time.is_empty() {
            return Err(FormError::MissingCookingTime);
        }
        let raw = self.servings.trim();
        if raw.is_empty() {
            return Err(FormError::MissingServings);
        }
        match raw.parse::<u32>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(FormError::InvalidServings(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormError, RecipeDraft};
    use crate::time::cooking_time::TimePreset;

    fn filled() -> RecipeDraft {
        let mut draft = RecipeDraft::new();
        draft.name = "Pancakes".to_string();
        draft.description = "Fluffy".to_string();
        draft.current_ingredient = "Flour".to_string();
        draft.add_ingredient();
        draft.set_cooking_time(TimePreset::FifteenMinutes.cooking_time());
        draft.servings = "4".to_string();
        draft
    }

    #[test]
    fn empty_ingredient_input_is_ignored() {
        let mut draft = RecipeDraft::new();
        assert!(!draft.add_ingredient());
        draft.current_ingredient = "Salt".to_string();
        assert!(draft.add_ingredient());
        assert!(draft.current_ingredient.is_empty());
        assert_eq!(draft.remove_ingredient(3), None);
        assert_eq!(draft.remove_ingredient(0).as_deref(), Some("Salt"));
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut draft = filled();
        assert!(draft.can_save());

        draft.cooking_time.clear();
        assert_eq!(draft.validate(), Err(FormError::MissingCookingTime));

        draft.name.clear();
        assert_eq!(draft.validate(), Err(FormError::MissingName));
    }

    #[test]
    fn non_positive_servings_are_rejected() {
        let mut draft = filled();
        draft.servings = "0".to_string();
        assert_eq!(
            draft.validate(),
            Err(FormError::InvalidServings("0".to_string()))
        );
        draft.servings = "two".to_string();
        assert!(!draft.can_save());
    }

    #[test]
    fn picker_value_tracks_cooking_time() {
        let draft = filled();
        assert_eq!(draft.cooking_time, "15 mins");
        assert_eq!(
            draft.picker_value(),
            Some(TimePreset::FifteenMinutes.cooking_time())
        );
    }
}
