//! Data model for the jargon translation pipeline.

use serde::{Deserialize, Serialize};

/// Scores above this earn the "suspicious" stamp on the result card.
pub const SUSPICIOUS_THRESHOLD: u8 = 60;

pub const FALLBACK_TRANSLATION: &str = "系统过热，CPU都烧了也没听懂这句黑话...";
pub const FALLBACK_BS_SCORE: u8 = 99;
pub const FALLBACK_TONE: &str = "System Crash";
pub const FALLBACK_COMMENT: &str = "看来这句谎话连AI都编不下去了。";

/// Who said the statement being translated. Only changes the prompt wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpeakerRole {
    #[serde(alias = "founder")]
    Founder,
    #[serde(alias = "investor")]
    Investor,
}

impl SpeakerRole {
    /// How the role is described to the model.
    pub fn prompt_label(self) -> &'static str {
        match self {
            SpeakerRole::Founder => "Startup Founder (asking for money)",
            SpeakerRole::Investor => "Venture Capitalist (holding the money)",
        }
    }
}

/// Request body for a translation.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub role: SpeakerRole,
}

/// The final, validated translation handed to callers.
///
/// `original` is always the caller's exact input; whatever the model echoes is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub original: String,
    pub translation: String,
    /// 0 – 100
    pub bs_score: u8,
    pub tone_analysis: String,
    pub witty_comment: String,
}

impl TranslationResult {
    /// The sentinel returned whenever the pipeline cannot produce a model-derived result.
    pub fn fallback(original: &str) -> Self {
        Self {
            original: original.to_string(),
            translation: FALLBACK_TRANSLATION.to_string(),
            bs_score: FALLBACK_BS_SCORE,
            tone_analysis: FALLBACK_TONE.to_string(),
            witty_comment: FALLBACK_COMMENT.to_string(),
        }
    }

    /// Credibility shown on the card: the inverse of the BS score.
    pub fn trust_index(&self) -> u8 {
        100 - self.bs_score.min(100)
    }

    pub fn is_suspicious(&self) -> bool {
        self.bs_score > SUSPICIOUS_THRESHOLD
    }
}

/// The JSON object the provider is asked to produce.
///
/// Deserializing into this type is the trust boundary: wrong types fail here,
/// and `bs_score` is range-checked in `translator` before it becomes a `u8`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderVerdict {
    pub translation: String,
    pub bs_score: f64,
    pub tone_analysis: String,
    pub witty_comment: String,
}
