//! Request and document types for recipe generation.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input to one recipe generation.
///
/// Constructed fresh per user action and consumed by the prompt builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// Cuisine, e.g. `"Italian"` or `"Thai (Northern)"`.
    pub cuisine: String,

    /// The main ingredient the dish is built around.
    pub centerpiece: String,

    /// Approximate calorie target per serving.
    pub calories_per_serving: u32,

    /// Number of servings.
    pub servings: u32,

    /// Maximum preparation time in minutes.
    pub max_prep_minutes: u32,

    /// Free-text constraints (dietary restrictions, equipment, ...).
    /// May be empty; inlined into the prompt untruncated.
    pub additional_info: String,
}

impl RecipeRequest {
    pub fn new(
        cuisine: impl Into<String>,
        centerpiece: impl Into<String>,
        calories_per_serving: u32,
        servings: u32,
        max_prep_minutes: u32,
    ) -> Self {
        Self {
            cuisine: cuisine.into(),
            centerpiece: centerpiece.into(),
            calories_per_serving,
            servings,
            max_prep_minutes,
            additional_info: String::new(),
        }
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = info.into();
        self
    }
}

/// A shape-validated recipe, as returned by the model.
///
/// Wraps the raw `serde_json::Value` rather than a strictly typed struct:
/// validation guarantees every required key is present and the sequences are
/// sequences, but deliberately nothing about value types: a numeric-looking
/// string for `servings` is accepted. Consumers that want strict types call
/// [`parse_as`](Self::parse_as) at the edge.
///
/// The only way to obtain one is through the validating pipeline, so a
/// partially-valid document can never reach a consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecipeDocument {
    value: Value,
}

impl RecipeDocument {
    /// Crate-private: callers go through validation.
    pub(crate) fn new(value: Value) -> Self {
        Self { value }
    }

    /// The underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Consume the document, yielding the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// Recipe title, when it is a string.
    pub fn title(&self) -> Option<&str> {
        self.value.get("title").and_then(Value::as_str)
    }

    /// Dish description, when it is a string.
    pub fn description(&self) -> Option<&str> {
        self.value.get("description").and_then(Value::as_str)
    }

    /// Cuisine, when it is a string.
    pub fn cuisine(&self) -> Option<&str> {
        self.value.get("cuisine").and_then(Value::as_str)
    }

    /// Deserialize into a strictly typed structure such as [`Recipe`].
    pub fn parse_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.value)
    }
}

/// Strictly typed recipe for consumers that want more than shape guarantees.
///
/// Obtained via [`RecipeDocument::parse_as`]; deserialization fails where the
/// model bent the types (e.g. string `servings`), which shape validation
/// alone tolerates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub cuisine: String,
    pub servings: u32,
    pub calories_per_serving: u32,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub nutrition: Nutrition,
}

/// One ingredient line: a name and a free-form amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
}

/// Approximate per-serving nutrition facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbohydrates_g: f64,
}
