//! Structured error types for the Maquette engine.
//!
//! Two variants cover the real error sources: JSON parsing of a component
//! list, and PDF assembly failures. Per-component image problems are not
//! errors — the export degrades to a placeholder box instead (see `pdf`).

use thiserror::Error;

/// The unified error type returned by all public Maquette API functions.
#[derive(Debug, Error)]
pub enum MaquetteError {
    /// JSON input failed to parse as a component list.
    #[error("failed to parse component list: {source}\n  hint: {hint}")]
    Parse {
        source: serde_json::Error,
        hint: String,
    },
    /// PDF assembly failed.
    #[error("render error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for MaquetteError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "check for trailing commas, missing quotes, or unescaped characters".to_string()
            }
            serde_json::error::Category::Data => {
                "the JSON is valid but doesn't match the component schema; check the `type` tag and field names".to_string()
            }
            serde_json::error::Category::Eof => {
                "unexpected end of input — is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => "an I/O error occurred while reading".to_string(),
        };
        MaquetteError::Parse { source: e, hint }
    }
}
