//! Prompt Composer — deterministic string templates for every LLM call.
//!
//! Each template is a fixed string with `{placeholder}` slots filled by
//! `str::replace`; no model-side structure is requested, all outputs are
//! plain text.

use crate::generation::tone::Tone;

/// Initial cover-letter prompt. Replace `{tone}`, `{job_description}`,
/// `{resume_text}` before sending.
const COVER_LETTER_PROMPT_TEMPLATE: &str = "\
You are an expert HR assistant.
Generate a {tone} cover letter tailored for the following job description and resume.
Make it sound professional, unique, and concise.

Job Description:
{job_description}

Resume:
{resume_text}";

/// Improve prompt. Takes only the previously generated letter; the resume
/// and job description are intentionally not carried on this path.
const IMPROVE_PROMPT_TEMPLATE: &str = "\
You are an expert HR assistant.
Revise the following cover letter to improve its clarity, tone, and impact.
Keep it professional, unique, and concise.

Cover Letter:
{letter}";

/// Job-description analysis prompt. Plain-text insights for display
/// alongside the letter.
const ANALYSIS_PROMPT_TEMPLATE: &str = "\
You are an expert HR assistant.
Analyze the following job description. Summarize the key requirements, the
tone of the posting, and what a strong applicant should emphasize.
Respond in plain text, no markdown.

Job Description:
{job_description}";

/// Builds the initial generation prompt from the validated inputs.
/// Deterministic; the tone descriptor is lower-cased on interpolation.
pub fn compose_cover_letter_prompt(job_description: &str, resume_text: &str, tone: Tone) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{tone}", &tone.descriptor())
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text)
}

/// Builds the "improve this version" prompt from the last generated letter.
pub fn compose_improve_prompt(letter: &str) -> String {
    IMPROVE_PROMPT_TEMPLATE.replace("{letter}", letter)
}

/// Builds the job-description insights prompt.
pub fn compose_analysis_prompt(job_description: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{job_description}", job_description)
}
