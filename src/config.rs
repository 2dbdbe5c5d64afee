//! Model configuration and alias resolution.
//!
//! [`ModelConfig`] is the startup record (typically loaded from a
//! `config.json` the caller owns) naming the model, the API key, and an
//! optional bag of provider options. [`resolve_model_id`] maps user-facing
//! `claude` aliases onto fully qualified backend model ids; anything else
//! passes through unchanged.

use serde::Deserialize;

use crate::error::{RecipeError, Result};

/// Startup configuration for the recipe generator.
///
/// Loading and parsing the file is the caller's job; this type only defines
/// the record shape. `options` is applied once at generator construction:
/// recognized keys (`api_base`, `base_url`) configure the invocation layer,
/// and everything else is merged verbatim into each request body.
#[derive(Clone, Deserialize)]
pub struct ModelConfig {
    /// User-facing model name. May be a `claude` alias (resolved via
    /// [`resolve_model_id`]) or any backend model string.
    #[serde(default = "default_model")]
    pub model: String,

    /// API key sent as `Authorization: Bearer {key}` when present.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Extra provider options, applied client-wide at construction.
    #[serde(default)]
    pub options: Option<serde_json::Value>,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            options: None,
        }
    }
}

impl ModelConfig {
    /// Create a config for the given model with no key and no options.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the provider option bag.
    pub fn with_options(mut self, options: serde_json::Value) -> Self {
        self.options = Some(options);
        self
    }

    /// Parse a config record from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| RecipeError::Configuration(format!("invalid config JSON: {}", e)))
    }
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("options", &self.options)
            .finish()
    }
}

/// Resolve a user-facing model name to the backend model id.
///
/// `claude` aliases map to fully qualified `anthropic/` ids; rules are
/// ordered and the first match wins. Any name not starting with `claude` is
/// passed through unchanged; unknown strings fail at call time if the
/// backend rejects them, not here.
///
/// # Examples
///
/// ```
/// use recipe_genie::config::resolve_model_id;
///
/// assert_eq!(resolve_model_id("claude-3-opus-foo"), "anthropic/claude-3-opus-20240229");
/// assert_eq!(resolve_model_id("gpt-4o"), "gpt-4o");
/// ```
pub fn resolve_model_id(raw: &str) -> String {
    if !raw.starts_with("claude") {
        return raw.to_string();
    }
    if raw.contains("claude-3-7-sonnet") || raw.contains("claude-3.5") {
        "anthropic/claude-3-5-sonnet-20240620".to_string()
    } else if raw.contains("claude-3-opus") {
        "anthropic/claude-3-opus-20240229".to_string()
    } else if raw.contains("claude-3-sonnet") {
        "anthropic/claude-3-sonnet-20240229".to_string()
    } else if raw.contains("claude-3-haiku") {
        "anthropic/claude-3-haiku-20240307".to_string()
    } else {
        // Unrecognized claude version: fall back to 3 Sonnet
        "anthropic/claude-3-sonnet-20240229".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_claude_35_family() {
        assert_eq!(
            resolve_model_id("claude-3.5-sonnet"),
            "anthropic/claude-3-5-sonnet-20240620"
        );
        assert_eq!(
            resolve_model_id("claude-3-7-sonnet-latest"),
            "anthropic/claude-3-5-sonnet-20240620"
        );
    }

    #[test]
    fn resolve_claude_3_models() {
        assert_eq!(
            resolve_model_id("claude-3-opus-foo"),
            "anthropic/claude-3-opus-20240229"
        );
        assert_eq!(
            resolve_model_id("claude-3-sonnet"),
            "anthropic/claude-3-sonnet-20240229"
        );
        assert_eq!(
            resolve_model_id("claude-3-haiku-20240307"),
            "anthropic/claude-3-haiku-20240307"
        );
    }

    #[test]
    fn resolve_unknown_claude_defaults_to_sonnet() {
        assert_eq!(
            resolve_model_id("claude-weird"),
            "anthropic/claude-3-sonnet-20240229"
        );
        assert_eq!(resolve_model_id("claude"), "anthropic/claude-3-sonnet-20240229");
    }

    #[test]
    fn resolve_non_claude_passthrough() {
        assert_eq!(resolve_model_id("gpt-4o"), "gpt-4o");
        assert_eq!(resolve_model_id("gpt-3.5-turbo"), "gpt-3.5-turbo");
        // Not a prefix match, so it passes through even though it mentions claude
        assert_eq!(resolve_model_id("my-claude-3-opus"), "my-claude-3-opus");
    }

    #[test]
    fn ordered_rules_first_match_wins() {
        // Contains both a 3.5 marker and "claude-3-sonnet"; rule 1 applies
        assert_eq!(
            resolve_model_id("claude-3.5-and-claude-3-sonnet"),
            "anthropic/claude-3-5-sonnet-20240620"
        );
    }

    #[test]
    fn config_from_json() {
        let cfg = ModelConfig::from_json_str(
            r#"{"model": "claude-3-opus", "api_key": "sk-test", "options": {"api_base": "http://localhost:4000"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.model, "claude-3-opus");
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.options, Some(json!({"api_base": "http://localhost:4000"})));
    }

    #[test]
    fn config_defaults() {
        let cfg = ModelConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg.model, "gpt-3.5-turbo");
        assert!(cfg.api_key.is_none());
        assert!(cfg.options.is_none());
    }

    #[test]
    fn config_rejects_invalid_json() {
        let err = ModelConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, RecipeError::Configuration(_)));
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = ModelConfig::new("gpt-4o").with_api_key("sk-1234567890");
        let out = format!("{:?}", cfg);
        assert!(!out.contains("1234567890"));
        assert!(out.contains("***"));
    }
}
