//! Interaction Controller — the per-session state machine behind the UI.
//!
//! Flow: Validating → Extracting → Composing → Generating →
//!       (Translating) → Presenting, with a refinement sub-flow
//!       Presenting → ImprovePromptComposing → Generating →
//!       (Translating) → Presenting.
//!
//! Each command runs its pipeline to completion before returning; `&mut
//! self` rules out overlapping pipelines for one session at compile time.
//! Every failure is caught at the command boundary and rendered as a
//! `Presentation` — the session stays usable, nothing panics.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{DocumentFormat, ExtractionError, ResumeDocument};
use crate::generation::{
    compose_analysis_prompt, compose_cover_letter_prompt, compose_improve_prompt, Tone,
};
use crate::state::AppState;
use crate::translate::Language;

/// Pipeline phase, observable by the host between commands. Commands run
/// synchronously, so from the outside a session is either `Idle` (nothing
/// has run yet) or `Presenting` (the last command finished).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Extracting,
    Composing,
    ImprovePromptComposing,
    Generating,
    Translating,
    Presenting,
}

/// How a draft came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DraftOrigin {
    Initial,
    Regenerated,
    Improved,
}

/// One generated cover letter. New drafts supersede but do not delete
/// prior ones; the session keeps the whole list for display.
#[derive(Debug, Clone, Serialize)]
pub struct Draft {
    pub id: Uuid,
    /// The model's output, always treated as English for translation.
    pub english_text: String,
    /// What the UI shows: the translation when a non-default language is
    /// selected, the English text otherwise.
    pub displayed_text: String,
    pub language: Language,
    pub origin: DraftOrigin,
    pub created_at: DateTime<Utc>,
}

/// Result of one user-triggered command, ready for the presentation layer.
#[derive(Debug, Clone)]
pub enum Presentation {
    /// A required input is missing — a warning, not an error; no external
    /// call was made.
    MissingInput(String),
    /// A new draft was produced (and appended to the session history).
    Letter(Draft),
    /// Job-description insights text.
    Analysis(String),
    /// A pipeline step failed; short human-readable message. When
    /// translation fails the untranslated letter is deliberately not
    /// carried here (see DESIGN.md).
    Failure(String),
}

/// A single user's interactive session: inputs, draft history, and the
/// component handles. Nothing here outlives the session.
pub struct Session {
    id: Uuid,
    state: AppState,
    pub job_description: String,
    pub tone: Tone,
    pub language: Language,
    resume: Option<ResumeDocument>,
    drafts: Vec<Draft>,
    phase: Phase,
}

impl Session {
    pub fn new(state: AppState) -> Self {
        let id = Uuid::new_v4();
        info!("session {id} opened");
        Self {
            id,
            state,
            job_description: String::new(),
            tone: Tone::default(),
            language: Language::default(),
            resume: None,
            drafts: Vec::new(),
            phase: Phase::Idle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// All drafts produced so far, oldest first.
    pub fn drafts(&self) -> &[Draft] {
        &self.drafts
    }

    pub fn latest_draft(&self) -> Option<&Draft> {
        self.drafts.last()
    }

    pub fn resume(&self) -> Option<&ResumeDocument> {
        self.resume.as_ref()
    }

    /// Accepts an upload from the file control, deriving the format from
    /// the file name. Only `.pdf` and `.docx` are accepted.
    pub fn upload_resume(
        &mut self,
        file_name: &str,
        content: Bytes,
    ) -> Result<(), ExtractionError> {
        let format = DocumentFormat::from_file_name(file_name)?;
        self.attach_resume(ResumeDocument::new(content, format));
        Ok(())
    }

    pub fn attach_resume(&mut self, resume: ResumeDocument) {
        self.resume = Some(resume);
    }

    // ────────────────────────────────────────────────────────────────────
    // Commands
    // ────────────────────────────────────────────────────────────────────

    /// Generate: the full pipeline from the current inputs.
    pub async fn generate(&mut self) -> Presentation {
        let result = self.run_generate(DraftOrigin::Initial).await;
        self.present(result.map(Presentation::Letter))
    }

    /// Regenerate: full restart using the same inputs, including a fresh
    /// extraction pass over the stored resume bytes.
    pub async fn regenerate(&mut self) -> Presentation {
        let result = self.run_generate(DraftOrigin::Regenerated).await;
        self.present(result.map(Presentation::Letter))
    }

    /// Improve This Version: revises the most recent draft's English text.
    /// The resume and job description are not consulted on this path.
    pub async fn improve(&mut self) -> Presentation {
        let result = self.run_improve().await;
        self.present(result.map(Presentation::Letter))
    }

    /// Analyze: job-description insights, independent of the resume.
    pub async fn analyze(&mut self) -> Presentation {
        let result = self.run_analyze().await;
        self.present(result.map(Presentation::Analysis))
    }

    // ────────────────────────────────────────────────────────────────────
    // Pipelines
    // ────────────────────────────────────────────────────────────────────

    async fn run_generate(&mut self, origin: DraftOrigin) -> Result<Draft, AppError> {
        self.transition(Phase::Validating);
        let job_description = self.job_description.trim().to_string();
        if job_description.is_empty() {
            return Err(AppError::Validation(
                "Please paste the job description.".to_string(),
            ));
        }
        let resume = match &self.resume {
            Some(r) if !r.content.is_empty() => r.clone(),
            _ => {
                return Err(AppError::Validation(
                    "Please upload your resume.".to_string(),
                ))
            }
        };

        self.transition(Phase::Extracting);
        let resume_text = resume.extract_text()?;
        info!(
            "session {}: extracted {} chars of resume text",
            self.id,
            resume_text.len()
        );

        self.transition(Phase::Composing);
        let prompt = compose_cover_letter_prompt(&job_description, &resume_text, self.tone);

        self.generate_and_localize(prompt, origin).await
    }

    async fn run_improve(&mut self) -> Result<Draft, AppError> {
        self.transition(Phase::Validating);
        let previous = match self.drafts.last() {
            Some(d) => d.english_text.clone(),
            None => {
                return Err(AppError::Validation(
                    "Generate a cover letter before improving it.".to_string(),
                ))
            }
        };

        self.transition(Phase::ImprovePromptComposing);
        let prompt = compose_improve_prompt(&previous);

        self.generate_and_localize(prompt, DraftOrigin::Improved).await
    }

    async fn run_analyze(&mut self) -> Result<String, AppError> {
        self.transition(Phase::Validating);
        let job_description = self.job_description.trim().to_string();
        if job_description.is_empty() {
            return Err(AppError::Validation(
                "Please paste the job description.".to_string(),
            ));
        }

        self.transition(Phase::Composing);
        let prompt = compose_analysis_prompt(&job_description);

        self.transition(Phase::Generating);
        let analysis = self.state.generator.generate(&prompt).await?;
        Ok(analysis)
    }

    /// Shared tail of the generate/improve pipelines: one generation call,
    /// then one translation call when a non-default language is selected.
    async fn generate_and_localize(
        &mut self,
        prompt: String,
        origin: DraftOrigin,
    ) -> Result<Draft, AppError> {
        self.transition(Phase::Generating);
        let english_text = self.state.generator.generate(&prompt).await?;

        let displayed_text = if self.language.is_default() {
            english_text.clone()
        } else {
            self.transition(Phase::Translating);
            self.state
                .translator
                .translate(&english_text, self.language)
                .await?
        };

        let draft = Draft {
            id: Uuid::new_v4(),
            english_text,
            displayed_text,
            language: self.language,
            origin,
            created_at: Utc::now(),
        };
        info!(
            "session {}: draft {} ({:?}) ready",
            self.id, draft.id, draft.origin
        );
        self.drafts.push(draft.clone());
        Ok(draft)
    }

    fn present(&mut self, result: Result<Presentation, AppError>) -> Presentation {
        self.transition(Phase::Presenting);
        match result {
            Ok(presentation) => presentation,
            Err(AppError::Validation(msg)) => Presentation::MissingInput(msg),
            Err(e) => Presentation::Failure(e.user_message()),
        }
    }

    fn transition(&mut self, next: Phase) {
        debug!("session {}: {:?} -> {:?}", self.id, self.phase, next);
        self.phase = next;
    }
}
