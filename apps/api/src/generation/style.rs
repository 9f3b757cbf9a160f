//! Resume style — maps the user's chosen style to the instruction handed to the rewriter.

use serde::{Deserialize, Serialize};

/// Writing style requested for the rewritten experiences.
///
/// Any label outside the four known styles deserializes to `Balanced`,
/// which carries the default instruction instead of failing the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeStyle {
    #[default]
    Professional,
    Casual,
    Technical,
    Concise,
    #[serde(other)]
    Balanced,
}

impl ResumeStyle {
    pub fn instruction(self) -> &'static str {
        match self {
            ResumeStyle::Professional => "Use formal, business-oriented language.",
            ResumeStyle::Casual => "Use a conversational, friendly tone.",
            ResumeStyle::Technical => "Include detailed technical terminology.",
            ResumeStyle::Concise => "Keep sentences short and remove unnecessary words.",
            ResumeStyle::Balanced => "Use a balanced, professional style.",
        }
    }
}
