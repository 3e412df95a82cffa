use crate::translation::translator::Translator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable via its `ChatCompletion` backend. Default: `LlmClient` against DeepSeek.
    pub translator: Translator,
}
