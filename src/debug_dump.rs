//! Postmortem persistence of generated documents and failure context.
//!
//! Writes timestamped files into a debug directory so a failed or surprising
//! generation can be inspected offline: `recipe_data_*.json` for validated
//! documents, `error_*.log` for failures with whatever raw payload was
//! available. The directory is an explicit parameter; callers that want the
//! conventional location pass [`DEFAULT_DEBUG_DIR`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::Value;
use tracing::debug;

use crate::types::RecipeDocument;

/// Conventional debug directory, relative to the process working directory.
pub const DEFAULT_DEBUG_DIR: &str = "debug_logs";

fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Persist a validated document as `recipe_data_{timestamp}.json`.
///
/// Returns the path written.
pub fn save_recipe_data(dir: impl AsRef<Path>, doc: &RecipeDocument) -> io::Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("recipe_data_{}.json", timestamp()));
    let text = serde_json::to_string_pretty(doc.as_value())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&path, text)?;
    debug!(path = %path.display(), "recipe data saved");
    Ok(path)
}

/// Persist failure context as `error_{timestamp}.log`.
///
/// `data` is whatever raw payload accompanied the failure (the unparsed
/// completion, the invalid document), serialized after the message.
pub fn log_error(
    dir: impl AsRef<Path>,
    message: &str,
    data: Option<&Value>,
) -> io::Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("error_{}.log", timestamp()));

    let mut content = format!("ERROR: {}\n\n", message);
    if let Some(value) = data {
        content.push_str("DATA:\n");
        match serde_json::to_string_pretty(value) {
            Ok(text) => content.push_str(&text),
            Err(e) => content.push_str(&format!("Could not serialize data: {}\n", e)),
        }
    }

    fs::write(&path, content)?;
    debug!(path = %path.display(), "error context saved");
    Ok(path)
}
