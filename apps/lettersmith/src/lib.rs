//! Lettersmith — a single-session cover-letter generator.
//!
//! Takes a resume (PDF or DOCX) and a job description, calls a hosted
//! generative-language model for a tailored cover letter, optionally
//! translates it, and supports iterative refinement (Regenerate, Improve).
//! The presentation layer is the host's concern: this crate exposes a
//! command-driven [`Session`] and renders nothing itself.
//!
//! Typical wiring:
//!
//! ```no_run
//! use lettersmith::{AppState, Config, Session};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! lettersmith::init_tracing(&config);
//! let mut session = Session::new(AppState::from_config(config));
//! session.job_description = "Seeking a backend engineer".to_string();
//! // session.upload_resume("resume.pdf", bytes)?;
//! let _presentation = session.generate().await;
//! # Ok(())
//! # }
//! ```

mod config;
mod errors;
pub mod extract;
pub mod generation;
pub mod llm_client;
pub mod session;
mod state;
pub mod translate;

pub use config::Config;
pub use errors::AppError;
pub use extract::{DocumentFormat, ExtractionError, ResumeDocument};
pub use generation::Tone;
pub use llm_client::{GeminiClient, GenerationError, TextGenerator};
pub use session::{Draft, DraftOrigin, Phase, Presentation, Session};
pub use state::AppState;
pub use translate::{HttpTranslator, Language, TranslationError, Translator};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for a host that has no subscriber of its
/// own. Call once at startup, after loading configuration.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
