//! Backend trait and the normalized completion request.
//!
//! The [`Backend`] trait abstracts over completion providers, translating a
//! normalized [`CompletionRequest`] into the provider's HTTP API and
//! returning the raw completion text. One call per request: no streaming,
//! no conversation history, no transport retry.
//!
//! Built-in implementations: [`OpenAiBackend`] (any OpenAI-compatible
//! endpoint, including LiteLLM-style gateways that route `anthropic/` model
//! ids) and [`MockBackend`] for tests.

pub mod mock;
pub mod openai;

pub use mock::MockBackend;
pub use openai::OpenAiBackend;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;

/// Sampling temperature used for every generation call.
pub const TEMPERATURE: f64 = 0.7;

/// Output-token ceiling used for every generation call.
pub const MAX_TOKENS: u32 = 2500;

/// A normalized completion request, provider-agnostic.
///
/// Carries a single user-role prompt and the fixed sampling parameters. The
/// `options` bag holds extra provider settings merged verbatim into the
/// request body.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Resolved backend model id (e.g. `"anthropic/claude-3-opus-20240229"`,
    /// `"gpt-4o"`).
    pub model: String,

    /// The full prompt, sent as one user message. No system message.
    pub prompt: String,

    /// Sampling temperature.
    pub temperature: f64,

    /// Maximum output tokens.
    pub max_tokens: u32,

    /// Extra options merged into the provider request body.
    pub options: Option<serde_json::Value>,
}

impl CompletionRequest {
    /// Build a request with the fixed sampling parameters.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            options: None,
        }
    }

    /// Attach extra provider options.
    pub fn with_options(mut self, options: Option<serde_json::Value>) -> Self {
        self.options = options;
        self
    }
}

/// Abstraction over completion providers.
///
/// Implementors issue one synchronous request and return the raw completion
/// text; every transport or provider failure surfaces as
/// [`RecipeError::Invocation`](crate::RecipeError::Invocation) carrying the
/// model id. Object-safe, used as `Arc<dyn Backend>`.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Execute one completion call and return the raw response text.
    async fn complete(
        &self,
        client: &Client,
        base_url: &str,
        request: &CompletionRequest,
    ) -> Result<String>;

    /// Human-readable name for logging and diagnostics.
    fn name(&self) -> &'static str;
}
