//! Shape validation of parsed recipe data.
//!
//! The checks are ordered and short-circuit on the first violation. They are
//! shape checks only: key presence and sequence-ness. Value types are never
//! enforced: a string `servings` passes, `instructions` elements may be any
//! shape, and no range is checked against the request. The pipeline trusts
//! the model's content, only not its structure.

use serde_json::Value;
use thiserror::Error;

/// Top-level keys every recipe must carry.
const REQUIRED_KEYS: [&str; 10] = [
    "title",
    "description",
    "cuisine",
    "servings",
    "calories_per_serving",
    "ingredients",
    "instructions",
    "nutrition",
    "prep_time_minutes",
    "cook_time_minutes",
];

/// Subfields every `nutrition` object must carry.
const REQUIRED_NUTRITION: [&str; 4] = ["calories", "protein_g", "fat_g", "carbohydrates_g"];

/// A recipe structure violation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The top-level value is not a JSON object.
    #[error("invalid recipe data format: expected object, got {actual}")]
    InvalidFormat {
        /// The JSON type actually found.
        actual: &'static str,
    },

    /// One or more required top-level keys are absent. Lists every missing
    /// key, not just the first.
    #[error("recipe data missing required keys: {}", .missing.join(", "))]
    MissingKeys { missing: Vec<String> },

    /// `ingredients` is not a sequence.
    #[error("ingredients must be a list")]
    IngredientsNotAList,

    /// An `ingredients` element is not an object with `name` and `amount`.
    #[error("each ingredient must have 'name' and 'amount'")]
    MalformedIngredient,

    /// `instructions` is not a sequence.
    #[error("instructions must be a list")]
    InstructionsNotAList,

    /// A required `nutrition` subfield is absent.
    #[error("missing nutrition field: {0}")]
    MissingNutrition(String),
}

/// Check the parsed value against the recipe shape.
///
/// On success the value may be trusted as a recipe document; on failure the
/// first violated check is reported.
pub fn validate(value: &Value) -> Result<(), ValidationError> {
    let map = value.as_object().ok_or(ValidationError::InvalidFormat {
        actual: json_type_name(value),
    })?;

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !map.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingKeys { missing });
    }

    let ingredients = map["ingredients"]
        .as_array()
        .ok_or(ValidationError::IngredientsNotAList)?;
    for ingredient in ingredients {
        let ok = ingredient
            .as_object()
            .is_some_and(|o| o.contains_key("name") && o.contains_key("amount"));
        if !ok {
            return Err(ValidationError::MalformedIngredient);
        }
    }

    if !map["instructions"].is_array() {
        return Err(ValidationError::InstructionsNotAList);
    }

    let nutrition = &map["nutrition"];
    for field in REQUIRED_NUTRITION {
        if nutrition.get(field).is_none() {
            return Err(ValidationError::MissingNutrition(field.to_string()));
        }
    }

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
