use thiserror::Error;

use crate::extract::ExtractionError;
use crate::llm_client::GenerationError;
use crate::translate::TranslationError;

/// Application-level error type.
///
/// Every user-triggered command catches these at its boundary and renders
/// them as a short human-readable message; none of them crash the session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),
}

impl AppError {
    /// Short message suitable for direct display by the presentation layer.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                format!("Could not read the uploaded resume: {e}")
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                format!("Cover letter generation failed: {e}")
            }
            AppError::Translation(e) => {
                tracing::error!("Translation error: {e}");
                format!("Translation failed: {e}")
            }
        }
    }
}
