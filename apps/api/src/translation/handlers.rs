//! Axum route handlers for the Translation API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::translation::models::{SpeakerRole, TranslationRequest, TranslationResult};
use crate::translation::quick_prompts::{self, DEFAULT_SAMPLE_SIZE};
use crate::translation::translator::Translation;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    #[serde(flatten)]
    pub result: TranslationResult,
    pub trust_index: u8,
    pub suspicious: bool,
    pub fallback: bool,
}

impl From<Translation> for TranslateResponse {
    fn from(translation: Translation) -> Self {
        let Translation { result, fallback } = translation;
        Self {
            trust_index: result.trust_index(),
            suspicious: result.is_suspicious(),
            fallback,
            result,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PromptsQuery {
    pub role: SpeakerRole,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct PromptsResponse {
    pub role: SpeakerRole,
    pub prompts: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/translate
///
/// Translates one statement. Provider failures come back as the fallback
/// result with `fallback: true`, never as an HTTP error.
pub async fn handle_translate(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslateResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let translation = state
        .translator
        .translate_detailed(&request.text, request.role)
        .await;

    Ok(Json(translation.into()))
}

/// GET /api/v1/prompts?role=FOUNDER&count=3
///
/// Returns a random handful of example statements for the role.
pub async fn handle_quick_prompts(Query(query): Query<PromptsQuery>) -> Json<PromptsResponse> {
    let count = query.count.unwrap_or(DEFAULT_SAMPLE_SIZE);
    Json(PromptsResponse {
        role: query.role,
        prompts: quick_prompts::sample(query.role, count),
    })
}
