use thiserror::Error;

use crate::validate::ValidationError;

/// Errors produced by the recipe generation pipeline.
///
/// Every variant is terminal for the `generate_recipe` call that raised it:
/// there is no retry, no partial result, and no corrective re-prompt. Callers
/// present the error and let the user resubmit from scratch. Each variant
/// carries enough context (model id, raw payload, missing keys) to support
/// offline debugging.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Model configuration could not be applied before prompt building.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The backend call failed (network, auth, quota, invalid model id).
    #[error("failed to generate recipe with model '{model}': {message}")]
    Invocation {
        /// The resolved backend model id the call was issued with.
        model: String,
        /// Underlying failure message from the transport or provider.
        message: String,
    },

    /// No JSON-shaped span was found in the completion text.
    #[error("no JSON found in response")]
    Extraction {
        /// The full raw completion, kept for postmortem inspection.
        raw: String,
    },

    /// A JSON span was found but failed to parse.
    #[error("failed to parse recipe data: {reason}")]
    Parse {
        /// The underlying JSON syntax error.
        reason: String,
        /// A truncated copy of the offending span (max 200 chars).
        raw_json: String,
    },

    /// The parsed structure is missing required recipe shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
