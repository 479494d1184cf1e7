//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose list/search/save/favorite/delete flows to Dart via FRB.
//! - Flatten domain types into FFI-friendly strings and envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - IDs cross the boundary as hyphenated UUID strings.
//! - One process-global store backs every call; it starts seeded.

use log::warn;
use recipebook_core::{
    core_version as core_version_inner, format_cooking_time as format_cooking_time_inner,
    init_logging as init_logging_inner, ping as ping_inner, Recipe, RecipeColor, RecipeDraft,
    RecipeId, RecipeImage, RecipeStore, TimePreset,
};
use std::sync::OnceLock;
use uuid::Uuid;

static STORE: OnceLock<RecipeStore> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Flattened recipe row for list and detail screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub meal_type: String,
    pub dietary_type: String,
    pub ingredients: Vec<String>,
    /// Fallback icon name, used when `image_bytes` and `image_ref` are empty.
    pub icon: String,
    pub cooking_time: String,
    pub servings: u32,
    pub difficulty: String,
    pub is_favorite: bool,
    /// Named token (`orange`) or `#rrggbb`.
    pub color: String,
    /// Opaque `0xAARRGGBB` value for direct use as a Flutter `Color`.
    pub color_argb: u32,
    pub image_bytes: Option<Vec<u8>>,
    pub image_ref: Option<String>,
}

/// Form payload submitted by the add/edit screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeDraftInput {
    /// Present when editing an existing recipe.
    pub editing_id: Option<String>,
    pub name: String,
    pub description: String,
    pub meal_type: String,
    pub dietary_type: String,
    pub ingredients: Vec<String>,
    pub cooking_time: String,
    /// Raw servings text as typed.
    pub servings: String,
    pub difficulty: String,
    /// Named token or `#rrggbb`; unknown values keep the draft's color
    /// (orange for new recipes).
    pub color: String,
    pub image_bytes: Option<Vec<u8>>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeActionResponse {
    /// Whether operation took effect.
    pub ok: bool,
    /// Affected recipe ID.
    pub recipe_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl RecipeActionResponse {
    fn success(message: impl Into<String>, recipe_id: RecipeId) -> Self {
        Self {
            ok: true,
            recipe_id: Some(recipe_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            recipe_id: None,
            message: message.into(),
        }
    }
}

/// Lists every recipe in store order.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_list() -> Vec<RecipeItem> {
    store().list().iter().map(to_recipe_item).collect()
}

/// Filters recipes by name/description, case-insensitively.
///
/// Empty text returns the full list.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_search(text: String) -> Vec<RecipeItem> {
    store()
        .search(text.as_str())
        .iter()
        .map(to_recipe_item)
        .collect()
}

/// Gets one recipe for the detail screen.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_get(recipe_id: String) -> Option<RecipeItem> {
    let id = parse_recipe_id(&recipe_id).ok()?;
    store().get(id).as_ref().map(to_recipe_item)
}

/// Saves the add/edit form.
///
/// # FFI contract
/// - Creates a recipe when `editing_id` is absent, updates otherwise.
/// - Form validation failures return `ok=false` with the first problem.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_save(input: RecipeDraftInput) -> RecipeActionResponse {
    let store = store();
    let mut draft = match input.editing_id.as_deref() {
        Some(raw_id) => {
            let id = match parse_recipe_id(raw_id) {
                Ok(id) => id,
                Err(response) => return response,
            };
            match store.get(id) {
                Some(existing) => RecipeDraft::edit(&existing),
                None => return not_found("recipe_save", id),
            }
        }
        None => RecipeDraft::new(),
    };

    let editing = draft.editing_id().is_some();
    draft.name = input.name;
    draft.description = input.description;
    if !input.meal_type.is_empty() {
        draft.meal_type = input.meal_type;
    }
    if !input.dietary_type.is_empty() {
        draft.dietary_type = input.dietary_type;
    }
    if !input.difficulty.is_empty() {
        draft.difficulty = input.difficulty;
    }
    draft.ingredients = input
        .ingredients
        .into_iter()
        .filter(|item| !item.is_empty())
        .collect();
    draft.cooking_time = input.cooking_time;
    draft.servings = input.servings;
    if let Some(color) = parse_color(&input.color) {
        draft.background_color = color;
    }
    if let Some(bytes) = input.image_bytes {
        draft.image = Some(RecipeImage::Bytes(bytes));
    }

    match draft.save(store) {
        Ok(id) if editing => RecipeActionResponse::success("Recipe updated.", id),
        Ok(id) => RecipeActionResponse::success("Recipe created.", id),
        Err(err) => RecipeActionResponse::failure(format!("recipe_save failed: {err}")),
    }
}

/// Flips the favorite flag.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_toggle_favorite(recipe_id: String) -> RecipeActionResponse {
    let id = match parse_recipe_id(&recipe_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if store().toggle_favorite(id) {
        RecipeActionResponse::success("Favorite toggled.", id)
    } else {
        not_found("recipe_toggle_favorite", id)
    }
}

/// Deletes a recipe.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_remove(recipe_id: String) -> RecipeActionResponse {
    let id = match parse_recipe_id(&recipe_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if store().remove(id) {
        RecipeActionResponse::success("Recipe deleted.", id)
    } else {
        not_found("recipe_remove", id)
    }
}

/// Formats picker values; `None` when out of picker range.
#[flutter_rust_bridge::frb(sync)]
pub fn format_cooking_time(hours: u8, minutes: u8) -> Option<String> {
    format_cooking_time_inner(hours, minutes).ok()
}

/// Preset button labels in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn cooking_time_presets() -> Vec<String> {
    TimePreset::ALL
        .iter()
        .map(|preset| preset.label().to_string())
        .collect()
}

/// Display string for a preset label, e.g. `2h` -> `2 hours`.
#[flutter_rust_bridge::frb(sync)]
pub fn cooking_time_for_preset(label: String) -> Option<String> {
    label
        .parse::<TimePreset>()
        .ok()
        .map(|preset| preset.cooking_time().to_string())
}

/// Color tokens offered to new recipes, in picker order.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_color_palette() -> Vec<String> {
    RecipeColor::PALETTE.into_iter().map(color_token).collect()
}

fn store() -> &'static RecipeStore {
    STORE.get_or_init(RecipeStore::with_seed_data)
}

fn parse_recipe_id(raw: &str) -> Result<RecipeId, RecipeActionResponse> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        warn!("event=ffi_call module=ffi status=error error_code=invalid_recipe_id");
        RecipeActionResponse::failure(format!("invalid recipe id `{raw}`"))
    })
}

fn not_found(operation: &str, id: RecipeId) -> RecipeActionResponse {
    RecipeActionResponse::failure(format!("{operation}: recipe not found: {id}"))
}

fn to_recipe_item(recipe: &Recipe) -> RecipeItem {
    let (image_bytes, image_ref) = match &recipe.image {
        Some(RecipeImage::Bytes(bytes)) => (Some(bytes.clone()), None),
        Some(RecipeImage::Reference(reference)) => (None, Some(reference.clone())),
        None => (None, None),
    };
    RecipeItem {
        id: recipe.id.to_string(),
        name: recipe.name.clone(),
        description: recipe.description.clone(),
        meal_type: recipe.meal_type.clone(),
        dietary_type: recipe.dietary_type.clone(),
        ingredients: recipe.ingredients.clone(),
        icon: recipe.icon.clone(),
        cooking_time: recipe.cooking_time.clone(),
        servings: recipe.servings,
        difficulty: recipe.difficulty.clone(),
        is_favorite: recipe.is_favorite,
        color: color_token(recipe.background_color),
        color_argb: color_argb(recipe.background_color),
        image_bytes,
        image_ref,
    }
}

fn color_token(color: RecipeColor) -> String {
    match color {
        RecipeColor::Orange => "orange".to_string(),
        RecipeColor::Pink => "pink".to_string(),
        RecipeColor::Blue => "blue".to_string(),
        RecipeColor::Green => "green".to_string(),
        RecipeColor::Purple => "purple".to_string(),
        RecipeColor::Red => "red".to_string(),
        RecipeColor::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
    }
}

fn color_argb(color: RecipeColor) -> u32 {
    let (r, g, b) = color.to_rgb();
    0xFF00_0000 | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

fn parse_color(value: &str) -> Option<RecipeColor> {
    let token = value.trim().to_ascii_lowercase();
    match token.as_str() {
        "orange" => Some(RecipeColor::Orange),
        "pink" => Some(RecipeColor::Pink),
        "blue" => Some(RecipeColor::Blue),
        "green" => Some(RecipeColor::Green),
        "purple" => Some(RecipeColor::Purple),
        "red" => Some(RecipeColor::Red),
        _ => {
            let hex = token.strip_prefix('#')?;
            if hex.len() != 6 {
                return None;
            }
            let channel = |range: std::ops::Range<usize>| {
                hex.get(range)
                    .and_then(|part| u8::from_str_radix(part, 16).ok())
            };
            Some(RecipeColor::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
        }
    }
}
