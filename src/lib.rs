//! # Recipe Genie
//!
//! LLM-backed recipe generation: deterministic prompt construction, one-shot
//! model invocation, defensive JSON extraction, and schema validation.
//!
//! The crate turns structured constraints (cuisine, main ingredient, calorie
//! target, servings, prep time, free-text notes) into a prompt, asks a
//! completion backend for a recipe as JSON, isolates the JSON object inside
//! the model's free-form reply, and shape-validates it before any consumer
//! sees it. Display, printing, clipboard, and GUI glue live outside this
//! crate; it hands them a validated [`RecipeDocument`] or a typed error,
//! never anything in between.
//!
//! ## Core Concepts
//!
//! - **[`RecipeGenerator`]**: the pipeline, configured once from a
//!   [`ModelConfig`] (model alias resolution, API key, provider options) and
//!   read-only thereafter.
//! - **[`RecipeRequest`]**: one user action's constraints, consumed by the
//!   prompt builder.
//! - **[`Backend`]**: object-safe provider abstraction; [`OpenAiBackend`]
//!   for OpenAI-compatible endpoints (including LiteLLM-style gateways
//!   routing `anthropic/` ids), [`MockBackend`] for tests.
//! - **[`RecipeDocument`]**: the validated output. Shape-checked JSON with
//!   `parse_as::<T>()` for strict typing at the edges.
//! - **[`RecipeError`]**: the closed failure taxonomy; every stage failure
//!   is terminal for its call (no retry, no re-prompting).
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_genie::{ModelConfig, RecipeGenerator, RecipeRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ModelConfig::new("claude-3-opus").with_api_key("sk-...");
//!     let generator = RecipeGenerator::new(config)?;
//!
//!     let request = RecipeRequest::new("Italian", "eggplant", 500, 4, 30)
//!         .with_additional_info("vegetarian, no nuts");
//!     let recipe = generator.generate_recipe(&request).await?;
//!
//!     println!("{}", recipe_genie::format::export_text(&recipe));
//!     Ok(())
//! }
//! ```
//!
//! ## Testing against the pipeline
//!
//! Swap in a [`MockBackend`] to exercise everything but the network:
//!
//! ```no_run
//! use std::sync::Arc;
//! use recipe_genie::{MockBackend, ModelConfig, RecipeGenerator};
//!
//! let generator = RecipeGenerator::new(ModelConfig::new("gpt-4o"))?
//!     .with_backend(Arc::new(MockBackend::fixed("{...canned recipe JSON...}")));
//! # Ok::<(), recipe_genie::RecipeError>(())
//! ```

pub mod backend;
pub mod config;
pub mod debug_dump;
pub mod error;
pub mod extract;
pub mod format;
pub mod generator;
pub mod prompt;
pub mod types;
pub mod validate;

pub use backend::{Backend, CompletionRequest, MockBackend, OpenAiBackend};
pub use config::{resolve_model_id, ModelConfig};
pub use error::{RecipeError, Result};
pub use generator::{RecipeGenerator, DEFAULT_BASE_URL};
pub use types::{Ingredient, Nutrition, Recipe, RecipeDocument, RecipeRequest};
pub use validate::ValidationError;
