pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::translation::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Translation API
        .route("/api/v1/translate", post(handlers::handle_translate))
        .route("/api/v1/prompts", get(handlers::handle_quick_prompts))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ProviderConfig;
    use crate::llm_client::{ChatCompletion, ChatRequest, ChatResponse, LlmError};
    use crate::translation::translator::Translator;

    struct FixedReply(Option<&'static str>);

    #[async_trait]
    impl ChatCompletion for FixedReply {
        async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, LlmError> {
            match self.0 {
                Some(content) => Ok(serde_json::from_value(json!({
                    "choices": [{ "message": { "content": content } }]
                }))?),
                None => Err(LlmError::EmptyContent),
            }
        }
    }

    fn router(reply: Option<&'static str>) -> Router {
        let translator = Translator::new(Arc::new(FixedReply(reply)), &ProviderConfig::default());
        build_router(AppState { translator })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn translate_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/translate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = router(None)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "jargon-api");
    }

    #[tokio::test]
    async fn test_translate_returns_result_with_card_fields() {
        let reply = r#"{"translation":"我们永远不会盈利","bsScore":85,"toneAnalysis":"自信过头","wittyComment":"听听就好"}"#;
        let response = router(Some(reply))
            .oneshot(translate_request(
                json!({ "text": "我们下个月就能盈利", "role": "FOUNDER" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["original"], "我们下个月就能盈利");
        assert_eq!(body["translation"], "我们永远不会盈利");
        assert_eq!(body["bsScore"], 85);
        assert_eq!(body["toneAnalysis"], "自信过头");
        assert_eq!(body["wittyComment"], "听听就好");
        assert_eq!(body["trustIndex"], 15);
        assert_eq!(body["suspicious"], true);
        assert_eq!(body["fallback"], false);
    }

    #[tokio::test]
    async fn test_translate_provider_failure_is_still_200() {
        let response = router(None)
            .oneshot(translate_request(
                json!({ "text": "可以保持联系", "role": "INVESTOR" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["original"], "可以保持联系");
        assert_eq!(body["bsScore"], 99);
        assert_eq!(body["toneAnalysis"], "System Crash");
        assert_eq!(body["fallback"], true);
    }

    #[tokio::test]
    async fn test_reply_matching_fallback_text_is_not_flagged() {
        let reply = r#"{"translation":"系统过热，CPU都烧了也没听懂这句黑话...","bsScore":99,"toneAnalysis":"System Crash","wittyComment":"看来这句谎话连AI都编不下去了。"}"#;
        let response = router(Some(reply))
            .oneshot(translate_request(
                json!({ "text": "可以保持联系", "role": "INVESTOR" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["toneAnalysis"], "System Crash");
        assert_eq!(body["fallback"], false);
    }

    #[tokio::test]
    async fn test_translate_rejects_blank_text() {
        let response = router(None)
            .oneshot(translate_request(json!({ "text": "   \n", "role": "FOUNDER" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_translate_rejects_unknown_role() {
        let response = router(None)
            .oneshot(translate_request(json!({ "text": "hi", "role": "ANGEL" })))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_quick_prompts_default_count() {
        let response = router(None)
            .oneshot(
                Request::get("/api/v1/prompts?role=INVESTOR")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["role"], "INVESTOR");
        assert_eq!(body["prompts"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_quick_prompts_custom_count() {
        let response = router(None)
            .oneshot(
                Request::get("/api/v1/prompts?role=founder&count=5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["role"], "FOUNDER");
        assert_eq!(body["prompts"].as_array().unwrap().len(), 5);
    }
}
