use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::translate::{HttpTranslator, Translator};

/// Shared component handles injected into every session.
///
/// Both service clients sit behind trait objects so tests can swap in
/// deterministic stubs without touching the session code.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub translator: Arc<dyn Translator>,
    pub config: Config,
}

impl AppState {
    /// Wires the real Gemini client and HTTP translator from configuration.
    pub fn from_config(config: Config) -> Self {
        let generator = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
        let translator = Arc::new(HttpTranslator::new(config.translate_api_url.clone()));
        Self {
            generator,
            translator,
            config,
        }
    }
}
