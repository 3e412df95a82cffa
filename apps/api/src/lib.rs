//! Jargon translator: turns founder and investor doublespeak into what they
//! actually mean, with a BS score, via an OpenAI-compatible completion provider.
//!
//! Library entry points are `translation::translator::Translator` and
//! `translation::session::TranslationSession`; the binary serves them over HTTP.

pub mod config;
pub mod errors;
pub mod llm_client;
pub mod routes;
pub mod state;
pub mod translation;
