//! Tone selection — the stylistic descriptor interpolated into the
//! generation prompt.

use serde::{Deserialize, Serialize};

/// User-selected tone for the cover letter. The lower-cased descriptor is
/// what gets interpolated into the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Formal,
    Friendly,
    Creative,
    Concise,
}

impl Tone {
    /// User-facing label as shown in the tone selector.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
            Tone::Creative => "Creative",
            Tone::Concise => "Concise",
        }
    }

    /// Prompt descriptor: the label, lower-cased.
    pub fn descriptor(&self) -> String {
        self.label().to_lowercase()
    }
}
