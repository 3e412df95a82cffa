//! Translation session — keeps only the latest request alive.
//!
//! Each `submit` bumps a generation counter and cancels whatever was in flight.
//! A result is handed back only if its generation is still the newest when it
//! resolves, so a slow stale reply can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::translation::models::{SpeakerRole, TranslationResult};
use crate::translation::translator::Translator;

pub struct TranslationSession {
    translator: Translator,
    generation: AtomicU64,
    in_flight: Mutex<CancellationToken>,
}

impl TranslationSession {
    pub fn new(translator: Translator) -> Self {
        Self {
            translator,
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(CancellationToken::new()),
        }
    }

    /// Generation of the most recent `submit` (0 before the first one).
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Translates `input_text`, superseding any earlier request from this session.
    ///
    /// Returns `None` if this request was superseded or cancelled before it resolved.
    pub async fn submit(&self, input_text: &str, role: SpeakerRole) -> Option<TranslationResult> {
        let token = CancellationToken::new();
        let generation = {
            let mut in_flight = self
                .in_flight
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            in_flight.cancel();
            *in_flight = token.clone();
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let result = self
            .translator
            .translate_cancellable(input_text, role, &token)
            .await?;

        if self.current_generation() != generation {
            debug!(
                "Discarding stale translation (generation {generation}, latest {})",
                self.current_generation()
            );
            return None;
        }

        Some(result)
    }

    /// Cancels the in-flight request, if any. Its `submit` resolves to `None`.
    pub fn cancel(&self) {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::config::ProviderConfig;
    use crate::llm_client::{ChatCompletion, ChatRequest, ChatResponse, LlmError};

    /// Answers after a delay that depends on the statement, echoing it in the translation.
    /// Tests run with paused time, so the delays only order events.
    struct DelayedEcho;

    #[async_trait]
    impl ChatCompletion for DelayedEcho {
        async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
            let user = &request.messages[1].content;
            let delay = if user.contains("slow") { 200 } else { 10 };
            let translation = if user.contains("slow") { "slow" } else { "fast" };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            let content = serde_json::json!({
                "translation": translation,
                "bsScore": 50,
                "toneAnalysis": "tone",
                "wittyComment": "comment",
            })
            .to_string();
            Ok(serde_json::from_value(serde_json::json!({
                "choices": [{ "message": { "content": content } }]
            }))
            .unwrap())
        }
    }

    fn session() -> Arc<TranslationSession> {
        let translator = Translator::new(Arc::new(DelayedEcho), &ProviderConfig::default());
        Arc::new(TranslationSession::new(translator))
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_submit_returns_result() {
        let session = session();
        let result = session.submit("fast pitch", SpeakerRole::Founder).await.unwrap();
        assert_eq!(result.translation, "fast");
        assert_eq!(result.original, "fast pitch");
        assert_eq!(session.current_generation(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_submit_supersedes_older() {
        let session = session();

        let stale = {
            let session = session.clone();
            tokio::spawn(async move { session.submit("slow pitch", SpeakerRole::Founder).await })
        };
        // Let the slow request get in flight first.
        tokio::time::sleep(Duration::from_millis(20)).await;

        let fresh = session.submit("fast pitch", SpeakerRole::Investor).await;

        assert!(stale.await.unwrap().is_none(), "stale result must be dropped");
        assert_eq!(fresh.unwrap().translation, "fast");
        assert_eq!(session.current_generation(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_in_flight_request() {
        let session = session();

        let pending = {
            let session = session.clone();
            tokio::spawn(async move { session.submit("slow pitch", SpeakerRole::Founder).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        session.cancel();

        assert!(pending.await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_usable_after_cancel() {
        let session = session();
        session.cancel();
        let result = session.submit("fast pitch", SpeakerRole::Founder).await;
        assert!(result.is_some());
    }
}
