//! Mock backend for testing without a live provider.
//!
//! [`MockBackend`] returns pre-configured completion texts in order, cycling
//! when exhausted, so downstream consumers can write deterministic tests
//! against the full pipeline. [`MockBackend::failing`] simulates a provider
//! failure for invocation-error paths.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::Client;

use super::{Backend, CompletionRequest};
use crate::error::{RecipeError, Result};

/// A test backend that returns canned completions in order.
#[derive(Debug)]
pub struct MockBackend {
    responses: Vec<String>,
    index: AtomicUsize,
    fail_with: Option<String>,
}

impl MockBackend {
    /// Create a mock with the given canned completions.
    ///
    /// Responses are returned in order; when exhausted, cycles from the
    /// beginning.
    pub fn new(responses: Vec<String>) -> Self {
        assert!(
            !responses.is_empty(),
            "MockBackend requires at least one response"
        );
        Self {
            responses,
            index: AtomicUsize::new(0),
            fail_with: None,
        }
    }

    /// Create a mock that always returns the same completion.
    pub fn fixed(response: impl Into<String>) -> Self {
        Self::new(vec![response.into()])
    }

    /// Create a mock whose every call fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            responses: Vec::new(),
            index: AtomicUsize::new(0),
            fail_with: Some(message.into()),
        }
    }

    fn next_response(&self) -> String {
        let idx = self.index.fetch_add(1, Ordering::Relaxed) % self.responses.len();
        self.responses[idx].clone()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn complete(
        &self,
        _client: &Client,
        _base_url: &str,
        request: &CompletionRequest,
    ) -> Result<String> {
        if let Some(ref message) = self.fail_with {
            return Err(RecipeError::Invocation {
                model: request.model.clone(),
                message: message.clone(),
            });
        }
        Ok(self.next_response())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request() -> CompletionRequest {
        CompletionRequest::new("test-model", "prompt")
    }

    #[tokio::test]
    async fn fixed_response() {
        let mock = MockBackend::fixed("Hello!");
        let client = Client::new();
        let text = mock
            .complete(&client, "http://unused", &test_request())
            .await
            .unwrap();
        assert_eq!(text, "Hello!");
    }

    #[tokio::test]
    async fn cycles_responses() {
        let mock = MockBackend::new(vec!["first".into(), "second".into()]);
        let client = Client::new();
        let request = test_request();
        let r1 = mock.complete(&client, "http://unused", &request).await.unwrap();
        let r2 = mock.complete(&client, "http://unused", &request).await.unwrap();
        let r3 = mock.complete(&client, "http://unused", &request).await.unwrap();
        assert_eq!(r1, "first");
        assert_eq!(r2, "second");
        assert_eq!(r3, "first"); // cycles
    }

    #[tokio::test]
    async fn failing_mock_carries_model_id() {
        let mock = MockBackend::failing("quota exceeded");
        let client = Client::new();
        let err = mock
            .complete(&client, "http://unused", &test_request())
            .await
            .unwrap_err();
        match err {
            RecipeError::Invocation { model, message } => {
                assert_eq!(model, "test-model");
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected invocation error, got {:?}", other),
        }
    }
}
