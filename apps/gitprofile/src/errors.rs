use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type for the profile generation pipeline.
///
/// Enrichment failures are deliberately NOT a variant here — enrichment is
/// best-effort and the pipeline downgrades it to a warning (see `main`).
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("missing required field '{path}' in resume data")]
    MissingRequiredField { path: String },

    #[error("template '{requested}' not found. Available templates: {}", .available.join(", "))]
    UnknownTemplate {
        requested: String,
        available: Vec<String>,
    },

    #[error("failed to extract resume text: {0}")]
    Extraction(String),

    #[error("resume model returned malformed structure: {0}")]
    Parse(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template_message_lists_available_names() {
        let err = ProfileError::UnknownTemplate {
            requested: "fancy".to_string(),
            available: vec!["minimal".to_string(), "modern".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("'fancy'"));
        assert!(message.contains("minimal, modern"));
    }

    #[test]
    fn test_missing_required_field_message_names_the_path() {
        let err = ProfileError::MissingRequiredField {
            path: "personal_info.name".to_string(),
        };
        assert!(err.to_string().contains("personal_info.name"));
    }
}
