//! Translation Client — runs one statement through the provider and always returns
//! something renderable.
//!
//! Flow: prompt_builder::build → ChatCompletion::complete → first choice content →
//!       strip fences → parse ProviderVerdict → validate bsScore → stamp `original`.
//!
//! Any failure along the way is logged and folded into `TranslationResult::fallback`.

use std::sync::Arc;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};

use crate::config::ProviderConfig;
use crate::llm_client::{
    strip_json_fences, ChatCompletion, ChatMessage, ChatRequest, LlmError, ResponseFormat,
};
use crate::translation::models::{ProviderVerdict, SpeakerRole, TranslationResult};
use crate::translation::prompt_builder;

const MAX_BS_SCORE: f64 = 100.0;

/// Why a translation fell back. Never leaves this module.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Provider reply is not the expected JSON object: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Provider reply violates the result schema: {0}")]
    Schema(String),
}

/// A translation and the path the pipeline took to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub result: TranslationResult,
    /// True only when the provider call or its reply failed.
    pub fallback: bool,
}

/// Cheap to clone; every clone shares the same provider.
#[derive(Clone)]
pub struct Translator {
    provider: Arc<dyn ChatCompletion>,
    model: String,
    temperature: f32,
}

impl Translator {
    pub fn new(provider: Arc<dyn ChatCompletion>, config: &ProviderConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Translates `input_text`. Never fails: provider trouble yields the fallback result.
    pub async fn translate(&self, input_text: &str, role: SpeakerRole) -> TranslationResult {
        self.translate_detailed(input_text, role).await.result
    }

    /// Like `translate`, but also reports whether the fallback path was taken.
    #[instrument(skip(self, input_text), fields(chars = input_text.chars().count()))]
    pub async fn translate_detailed(&self, input_text: &str, role: SpeakerRole) -> Translation {
        match self.try_translate(input_text, role).await {
            Ok(result) => {
                info!("Translation succeeded: bsScore={}", result.bs_score);
                Translation {
                    result,
                    fallback: false,
                }
            }
            Err(e) => {
                error!("Translation failed, returning fallback: {e}");
                Translation {
                    result: TranslationResult::fallback(input_text),
                    fallback: true,
                }
            }
        }
    }

    /// Like `translate`, but gives up as soon as `cancel` fires.
    ///
    /// Returns `None` when cancelled; the in-flight provider request is dropped.
    pub async fn translate_cancellable(
        &self,
        input_text: &str,
        role: SpeakerRole,
        cancel: &CancellationToken,
    ) -> Option<TranslationResult> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Translation cancelled before the provider answered");
                None
            }
            result = self.translate(input_text, role) => Some(result),
        }
    }

    async fn try_translate(
        &self,
        input_text: &str,
        role: SpeakerRole,
    ) -> Result<TranslationResult, TranslationError> {
        let prompt = prompt_builder::build(input_text, role);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompt.system),
                ChatMessage::user(prompt.user),
            ],
            response_format: ResponseFormat::json_object(),
            temperature: self.temperature,
        };

        let response = self.provider.complete(&request).await?;
        let content = response.first_content().ok_or(LlmError::EmptyContent)?;

        let verdict: ProviderVerdict = serde_json::from_str(strip_json_fences(content))?;

        Ok(TranslationResult {
            original: input_text.to_string(),
            bs_score: validate_bs_score(verdict.bs_score)?,
            translation: verdict.translation,
            tone_analysis: verdict.tone_analysis,
            witty_comment: verdict.witty_comment,
        })
    }
}

/// Accepts any finite score in [0, 100]; fractional scores round to the nearest integer.
fn validate_bs_score(raw: f64) -> Result<u8, TranslationError> {
    if !raw.is_finite() || !(0.0..=MAX_BS_SCORE).contains(&raw) {
        return Err(TranslationError::Schema(format!("bsScore {raw} outside 0-100")));
    }
    Ok(raw.round() as u8)
}
