// Shared prompt fragments used by every pipeline that calls the LLM.
// Each pipeline keeps its own prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
/// Appended to a pipeline's persona instruction.
pub const JSON_ONLY_SYSTEM: &str = "You must always respond with valid JSON only, \
    no markdown formatting or code blocks. \
    Do NOT include any text outside the JSON object.";
