// Jargon translation pipeline.
// Implements: prompt building, the provider round trip with fallback, request
// supersession, and quick-prompt sampling.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod handlers;
pub mod models;
pub mod prompt_builder;
pub mod prompts;
pub mod quick_prompts;
pub mod session;
pub mod translator;
