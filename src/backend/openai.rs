//! Backend for OpenAI-compatible chat-completions APIs.
//!
//! Covers OpenAI itself and the gateway deployments (LiteLLM proxy, vLLM,
//! Together, Groq, ...) that accept `provider/model` ids such as
//! `anthropic/claude-3-opus-20240229` on the same endpoint.
//!
//! Endpoint: `{base_url}/v1/chat/completions`, non-streaming only.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use super::{Backend, CompletionRequest};
use crate::error::{RecipeError, Result};

/// Backend for any OpenAI-compatible chat-completions API.
///
/// # Example
///
/// ```
/// use recipe_genie::backend::OpenAiBackend;
///
/// let backend = OpenAiBackend::new();
/// let with_key = OpenAiBackend::new().with_api_key("sk-...");
/// ```
#[derive(Clone, Default)]
pub struct OpenAiBackend {
    /// Optional API key. If set, sent as `Authorization: Bearer {key}`.
    api_key: Option<String>,
}

impl std::fmt::Debug for OpenAiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiBackend")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|k| {
                    if k.len() > 6 {
                        format!("{}***", &k[..6])
                    } else {
                        "***".to_string()
                    }
                }),
            )
            .finish()
    }
}

impl OpenAiBackend {
    /// Create a backend without authentication.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key for authentication.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Returns `true` if an API key has been configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the request body for `/v1/chat/completions`.
    ///
    /// One user message carrying the full prompt, the fixed sampling
    /// parameters, and any extra options merged in at the top level (an
    /// option with the same name as a standard field wins).
    fn build_body(request: &CompletionRequest) -> Value {
        let mut body = json!({
            "model": request.model,
            "messages": [{"role": "user", "content": request.prompt}],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        if let Some(ref custom) = request.options {
            if let (Some(base), Some(extra)) = (body.as_object_mut(), custom.as_object()) {
                for (k, v) in extra {
                    base.insert(k.clone(), v.clone());
                }
            }
        }

        body
    }

    /// Build the reqwest request with appropriate headers.
    fn build_http_request(
        &self,
        client: &Client,
        url: &str,
        body: &Value,
    ) -> reqwest::RequestBuilder {
        let mut req = client.post(url).json(body);
        if let Some(ref key) = self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }
        req
    }

    fn invocation_error(model: &str, message: impl Into<String>) -> RecipeError {
        RecipeError::Invocation {
            model: model.to_string(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl Backend for OpenAiBackend {
    async fn complete(
        &self,
        client: &Client,
        base_url: &str,
        request: &CompletionRequest,
    ) -> Result<String> {
        let url = format!("{}/v1/chat/completions", base_url.trim_end_matches('/'));
        let body = Self::build_body(request);

        debug!(model = %request.model, %url, "issuing completion request");

        let resp = self
            .build_http_request(client, &url, &body)
            .send()
            .await
            .map_err(|e| {
                Self::invocation_error(&request.model, format!("failed to connect to {}: {}", url, e))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(Self::invocation_error(
                &request.model,
                format!("HTTP {}: {}", status.as_u16(), text),
            ));
        }

        let json_resp: Value = resp.json().await.map_err(|e| {
            Self::invocation_error(&request.model, format!("invalid response body: {}", e))
        })?;

        let text = json_resp
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        debug!(chars = text.len(), "completion received");
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request() -> CompletionRequest {
        CompletionRequest::new("gpt-4o", "Generate a recipe.")
    }

    #[test]
    fn body_carries_single_user_message() {
        let body = OpenAiBackend::build_body(&test_request());

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["max_tokens"], 2500);

        let messages = body["messages"].as_array().expect("messages");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "Generate a recipe.");
        // No system message and no streaming flag
        assert!(body.get("stream").is_none());
    }

    #[test]
    fn body_merges_extra_options() {
        let request = test_request().with_options(Some(json!({"top_p": 0.9, "seed": 42})));
        let body = OpenAiBackend::build_body(&request);
        assert_eq!(body["top_p"], 0.9);
        assert_eq!(body["seed"], 42);
        assert_eq!(body["temperature"], 0.7);
    }

    #[test]
    fn body_options_override_standard_fields() {
        let request = test_request().with_options(Some(json!({"max_tokens": 100})));
        let body = OpenAiBackend::build_body(&request);
        assert_eq!(body["max_tokens"], 100);
    }

    #[test]
    fn auth_header_set_when_key_present() {
        let backend = OpenAiBackend::new().with_api_key("sk-test123");
        let client = Client::new();
        let body = json!({"test": true});
        let req = backend
            .build_http_request(&client, "https://api.openai.com/v1/chat/completions", &body)
            .build()
            .expect("build request");

        let auth = req.headers().get("Authorization").expect("auth header");
        assert_eq!(auth, "Bearer sk-test123");
    }

    #[test]
    fn no_auth_header_without_key() {
        let backend = OpenAiBackend::new();
        let client = Client::new();
        let body = json!({"test": true});
        let req = backend
            .build_http_request(&client, "https://api.openai.com/v1/chat/completions", &body)
            .build()
            .expect("build request");

        assert!(req.headers().get("Authorization").is_none());
    }

    #[test]
    fn debug_redacts_api_key() {
        let backend = OpenAiBackend::new().with_api_key("sk-1234567890abcdef");
        let out = format!("{:?}", backend);
        assert!(!out.contains("1234567890abcdef"));
        assert!(out.contains("sk-123"));
        assert!(out.contains("***"));
    }

    #[tokio::test]
    async fn connect_failure_is_invocation_error() {
        let backend = OpenAiBackend::new();
        let client = Client::new();
        let err = backend
            .complete(&client, "http://127.0.0.1:1", &test_request())
            .await
            .unwrap_err();
        match err {
            RecipeError::Invocation { model, message } => {
                assert_eq!(model, "gpt-4o");
                assert!(message.contains("failed to connect"));
            }
            other => panic!("expected invocation error, got {:?}", other),
        }
    }
}
