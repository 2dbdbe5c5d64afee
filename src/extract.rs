//! JSON span extraction from raw completion text.
//!
//! Models wrap their JSON in prose, markdown fences, and trailing
//! commentary. The extractor takes everything from the first `{` to the last
//! `}`, inclusive. That span is the contract: a reply containing several
//! independent objects or unbalanced braces inside string values yields the
//! whole first-to-last span, and downstream parsing reports the result.
//! Callers depend on these exact semantics; do not replace this with
//! depth-aware bracket matching.

use serde_json::Value;

use crate::error::{RecipeError, Result};

/// Isolate the JSON object span within arbitrary surrounding text.
///
/// Returns `text[first_brace..=last_brace]` when a `{` exists and the last
/// `}` sits strictly after it; otherwise fails with
/// [`RecipeError::Extraction`] ("no JSON found in response").
///
/// # Examples
///
/// ```
/// use recipe_genie::extract::extract_json;
///
/// let reply = "Here is your recipe:\n```json\n{\"title\":\"X\"}\n```\nEnjoy!";
/// assert_eq!(extract_json(reply).unwrap(), "{\"title\":\"X\"}");
/// ```
pub fn extract_json(text: &str) -> Result<&str> {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => Ok(&text[start..=end]),
        _ => Err(RecipeError::Extraction {
            raw: text.to_string(),
        }),
    }
}

/// Extract the JSON span and parse it.
///
/// Absence of any `{...}` span and malformed JSON inside the span are
/// distinct failures: the former is [`RecipeError::Extraction`], the latter
/// [`RecipeError::Parse`] naming the underlying syntax error.
pub fn parse_json(text: &str) -> Result<Value> {
    let span = extract_json(text)?;
    serde_json::from_str(span).map_err(|e| RecipeError::Parse {
        reason: e.to_string(),
        raw_json: truncate(span, 200),
    })
}

/// Truncate a string to at most `max_len` bytes, appending "..." if truncated.
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
