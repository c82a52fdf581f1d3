//! Translation Adapter — localizes a generated letter via an external
//! translation service.
//!
//! Invoked only when the selected output language is not the default.
//! No retry, no caching. The target code is the user-facing label
//! lower-cased and passed through verbatim — there is no normalization
//! table, so closely-named locales may fail or silently no-op on the
//! service side. That pass-through behavior is deliberate and kept.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Source language code sent on every request. Generated letters are
/// always treated as English for translation purposes.
const SOURCE_LANG: &str = "english";

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("service returned no translated text")]
    EmptyContent,
}

/// Output language selected by the user. `English` is the default and
/// skips translation entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
    German,
    Hindi,
    Mandarin,
}

impl Language {
    /// User-facing label as shown in the language selector.
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Hindi => "Hindi",
            Language::Mandarin => "Mandarin",
        }
    }

    /// Target code passed to the translation service: the label,
    /// lower-cased, nothing else.
    pub fn target_code(&self) -> String {
        self.label().to_lowercase()
    }

    pub fn is_default(&self) -> bool {
        *self == Language::English
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct TranslateErrorBody {
    error: String,
}

/// Trait seam for the translation service. The session holds an
/// `Arc<dyn Translator>` so tests can count invocations and stub results.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError>;
}

/// Translator backed by a LibreTranslate-compatible HTTP endpoint.
#[derive(Clone)]
pub struct HttpTranslator {
    client: Client,
    base_url: String,
}

impl HttpTranslator {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError> {
        let target_code = target.target_code();
        let request_body = TranslateRequest {
            q: text,
            source: SOURCE_LANG,
            target: &target_code,
            format: "text",
        };

        let url = format!("{}/translate", self.base_url.trim_end_matches('/'));

        let response = self.client.post(&url).json(&request_body).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TranslateErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(TranslationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let translated: TranslateResponse = response.json().await?;

        if translated.translated_text.trim().is_empty() {
            return Err(TranslationError::EmptyContent);
        }

        debug!("translated {} chars to {}", text.len(), target_code);

        Ok(translated.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_code_is_lowercased_label() {
        assert_eq!(Language::French.target_code(), "french");
        assert_eq!(Language::Mandarin.target_code(), "mandarin");
    }

    #[test]
    fn test_english_is_default_language() {
        assert_eq!(Language::default(), Language::English);
        assert!(Language::English.is_default());
        assert!(!Language::German.is_default());
    }

    #[test]
    fn test_request_body_shape() {
        let body = TranslateRequest {
            q: "Dear Hiring Manager",
            source: SOURCE_LANG,
            target: "french",
            format: "text",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["q"], "Dear Hiring Manager");
        assert_eq!(json["source"], "english");
        assert_eq!(json["target"], "french");
    }

    #[test]
    fn test_response_parses_translated_text() {
        let json = r#"{"translatedText": "Cher recruteur"}"#;
        let response: TranslateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.translated_text, "Cher recruteur");
    }
}
