//! The texting-style profile extracted from sample messages.

use serde::{Deserialize, Serialize};

/// Opening line used whenever the profile does not supply one.
pub const DEFAULT_OPENING: &str = "Hey.";

/// A texting-style profile.
///
/// The analysis call asks the model for strict JSON matching
/// [`ProfileFields`]; when the output does not parse, the profile degrades
/// to [`StyleProfile::Fallback`] carrying the raw text. Untagged so both
/// variants serialize as the bare object API clients expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleProfile {
    Structured(ProfileFields),
    Fallback(FallbackProfile),
}

/// The degrade path: raw model output plus a canned opener.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackProfile {
    pub summary: String,
    pub opening_line: String,
}

/// The full style schema. Every field is optional; the model is told to use
/// null or an empty list for anything the evidence does not support. `None`
/// fields are skipped on serialization so the profile echoes back exactly
/// what the model produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_phrases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_usage: Option<EmojiUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punctuation_style: Option<PunctuationStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capitalization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quirks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundaries: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_examples: Option<Vec<String>>,
}

/// How the sender uses emoji, if at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmojiUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Punctuation habits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PunctuationStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periods: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclamations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_marks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ellipses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quirks: Option<Vec<String>>,
}

impl StyleProfile {
    /// Parse a model completion into a profile.
    ///
    /// A strict parse failure is not an error: the raw text becomes the
    /// fallback summary and the opener defaults to [`DEFAULT_OPENING`].
    pub fn from_model_output(raw: &str) -> Self {
        match serde_json::from_str::<ProfileFields>(raw) {
            Ok(fields) => StyleProfile::Structured(fields),
            Err(_) => StyleProfile::Fallback(FallbackProfile {
                summary: raw.to_string(),
                opening_line: DEFAULT_OPENING.to_string(),
            }),
        }
    }

    /// The first message the persona sends.
    pub fn opening_line(&self) -> &str {
        match self {
            StyleProfile::Structured(fields) => {
                fields.opening_line.as_deref().unwrap_or(DEFAULT_OPENING)
            }
            StyleProfile::Fallback(fallback) => &fallback.opening_line,
        }
    }
}
