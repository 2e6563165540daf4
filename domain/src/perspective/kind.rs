//! Perspective value object identifying one sarcasm reasoner

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The fixed set of analysis perspectives (Value Object)
///
/// Each perspective scores one linguistic or semantic dimension of a text.
/// The identifier string (e.g. `"RhetoricalDeviceAgent"`) is what appears in
/// meta-queries, debate reports and serialized results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Perspective {
    #[serde(rename = "SemanticIncongruityAgent")]
    SemanticIncongruity,
    #[serde(rename = "PragmaticContrastAgent")]
    PragmaticContrast,
    #[serde(rename = "RhetoricalDeviceAgent")]
    RhetoricalDevice,
    #[serde(rename = "EmotionPolarityInverterAgent")]
    EmotionPolarityInverter,
    #[serde(rename = "CommonSenseViolationAgent")]
    CommonSenseViolation,
    #[serde(rename = "PersonaConflictAgent")]
    PersonaConflict,
}

impl Perspective {
    /// Every perspective, in canonical catalog order
    pub const ALL: [Perspective; 6] = [
        Perspective::SemanticIncongruity,
        Perspective::PragmaticContrast,
        Perspective::RhetoricalDevice,
        Perspective::EmotionPolarityInverter,
        Perspective::CommonSenseViolation,
        Perspective::PersonaConflict,
    ];

    /// Get the string identifier for this perspective
    pub fn as_str(&self) -> &'static str {
        match self {
            Perspective::SemanticIncongruity => "SemanticIncongruityAgent",
            Perspective::PragmaticContrast => "PragmaticContrastAgent",
            Perspective::RhetoricalDevice => "RhetoricalDeviceAgent",
            Perspective::EmotionPolarityInverter => "EmotionPolarityInverterAgent",
            Perspective::CommonSenseViolation => "CommonSenseViolationAgent",
            Perspective::PersonaConflict => "PersonaConflictAgent",
        }
    }

    /// Short capability description shown to the selector and recruiter
    pub fn default_description(&self) -> &'static str {
        match self {
            Perspective::SemanticIncongruity => {
                "Detects mismatch between literal meaning and context/world knowledge."
            }
            Perspective::PragmaticContrast => {
                "Analyzes violation of expressive conventions for a given situation."
            }
            Perspective::RhetoricalDevice => {
                "Identifies use of irony, hyperbole, and other rhetorical figures."
            }
            Perspective::EmotionPolarityInverter => {
                "Checks if expressed emotion contradicts the expected sentiment."
            }
            Perspective::CommonSenseViolation => {
                "Assesses if the statement contradicts common sense or logic."
            }
            Perspective::PersonaConflict => {
                "Looks for internal conflicts in the speaker's projected persona."
            }
        }
    }
}

impl Perspective {
    /// Whether this perspective's prompt includes the web context.
    ///
    /// Rhetorical and commonsense analyses judge the wording alone.
    pub fn uses_web_context(&self) -> bool {
        !matches!(
            self,
            Perspective::RhetoricalDevice | Perspective::CommonSenseViolation
        )
    }
}

impl std::fmt::Display for Perspective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Perspective {
    type Err = DomainError;

    /// Exact, case-sensitive match on the identifier
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Perspective::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::UnknownPerspective(s.to_string()))
    }
}
