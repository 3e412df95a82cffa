//! Prompt Builder — turns a statement and a speaker role into the two chat messages.
//!
//! Pure: no I/O, no state, same input gives the same output.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::translation::models::SpeakerRole;
use crate::translation::prompts::{TRANSLATE_PROMPT_TEMPLATE, TRANSLATOR_SYSTEM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPrompt {
    pub system: String,
    pub user: String,
}

/// Builds the system instruction and user turn for one translation.
///
/// The statement is embedded verbatim. Callers are expected to reject blank input first.
pub fn build(input_text: &str, role: SpeakerRole) -> BuiltPrompt {
    let system = format!("{TRANSLATOR_SYSTEM}\n\n{JSON_ONLY_SYSTEM}");

    // `{statement}` last so braces inside the user's text are never re-substituted
    let user = TRANSLATE_PROMPT_TEMPLATE
        .replace("{speaker}", role.prompt_label())
        .replace("{statement}", input_text);

    BuiltPrompt { system, user }
}
