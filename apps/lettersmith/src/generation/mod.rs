pub mod prompts;
pub mod tone;

pub use prompts::{compose_analysis_prompt, compose_cover_letter_prompt, compose_improve_prompt};
pub use tone::Tone;
