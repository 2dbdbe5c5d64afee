//! Pipeline orchestration.
//!
//! [`RecipeGenerator`] is the explicit configuration-plus-client object:
//! constructed once from a [`ModelConfig`], it owns the HTTP client, the
//! backend, the resolved model id, and the merged provider options, and is
//! treated as read-only thereafter. One [`generate_recipe`] call runs the
//! whole pipeline (build prompt, invoke, extract, parse, validate) and
//! either returns a validated [`RecipeDocument`] or the first stage failure.

use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::backend::{Backend, CompletionRequest, OpenAiBackend};
use crate::config::{resolve_model_id, ModelConfig};
use crate::error::{RecipeError, Result};
use crate::types::{RecipeDocument, RecipeRequest};
use crate::{extract, prompt, validate};

/// Base URL used when the configuration names none.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// The recipe generation pipeline, configured once at startup.
pub struct RecipeGenerator {
    client: Client,
    backend: Arc<dyn Backend>,
    base_url: String,
    model: String,
    options: Option<Value>,
}

impl RecipeGenerator {
    /// Apply a [`ModelConfig`]: resolve the model alias, set up the backend
    /// with the API key, and sort the option bag into invocation-layer
    /// settings (`api_base`/`base_url`) and per-request body options.
    ///
    /// No client-side timeout is set; the call runs to completion or to the
    /// backend's own timeout.
    pub fn new(config: ModelConfig) -> Result<Self> {
        let model = resolve_model_id(&config.model);

        let mut backend = OpenAiBackend::new();
        if let Some(key) = config.api_key {
            backend = backend.with_api_key(key);
        }

        let mut base_url = DEFAULT_BASE_URL.to_string();
        let mut extra = serde_json::Map::new();
        if let Some(options) = config.options {
            let map = options.as_object().ok_or_else(|| {
                RecipeError::Configuration("options must be a JSON object".to_string())
            })?;
            for (key, value) in map {
                match key.as_str() {
                    "api_base" | "base_url" => {
                        base_url = value
                            .as_str()
                            .ok_or_else(|| {
                                RecipeError::Configuration(format!(
                                    "option '{}' must be a string",
                                    key
                                ))
                            })?
                            .to_string();
                    }
                    _ => {
                        extra.insert(key.clone(), value.clone());
                    }
                }
            }
        }

        Ok(Self {
            client: Client::new(),
            backend: Arc::new(backend),
            base_url,
            model,
            options: if extra.is_empty() {
                None
            } else {
                Some(Value::Object(extra))
            },
        })
    }

    /// Replace the backend (e.g. with a [`MockBackend`](crate::backend::MockBackend)).
    pub fn with_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = backend;
        self
    }

    /// Replace the HTTP client, e.g. to apply a custom timeout or proxy.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// The resolved backend model id calls are issued with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The base URL calls are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate one recipe.
    ///
    /// Runs the full pipeline synchronously with respect to the caller: one
    /// network round trip, no internal concurrency, no retry. Every stage
    /// failure is terminal for this call; resubmitting means calling again
    /// from scratch.
    pub async fn generate_recipe(&self, request: &RecipeRequest) -> Result<RecipeDocument> {
        let prompt = prompt::build_prompt(request);
        debug!(
            model = %self.model,
            backend = self.backend.name(),
            prompt_chars = prompt.len(),
            "recipe generation started"
        );

        let completion_request =
            CompletionRequest::new(&self.model, prompt).with_options(self.options.clone());
        let completion = self
            .backend
            .complete(&self.client, &self.base_url, &completion_request)
            .await?;

        let value = extract::parse_json(&completion).inspect_err(|e| {
            warn!(completion_chars = completion.len(), error = %e, "completion did not yield JSON");
        })?;

        validate::validate(&value)?;

        debug!(title = value["title"].as_str().unwrap_or(""), "recipe validated");
        Ok(RecipeDocument::new(value))
    }
}

impl std::fmt::Debug for RecipeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeGenerator")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("backend", &self.backend.name())
            .field("options", &self.options)
            .finish()
    }
}
