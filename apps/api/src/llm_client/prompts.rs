// Shared prompt fragments.
// Each feature module keeps its own prompts.rs; this file only holds the
// cross-cutting pieces they append.

/// Appended to every prompt that expects structured output.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Return ONLY the JSON, with no explanations, apologies, or text outside it. \
Do NOT wrap it in markdown code fences.";

/// Appended to single-field extraction prompts.
pub const SINGLE_VALUE_INSTRUCTION: &str = "\
Reply with the value only, on one line. If it is not present, reply with an empty line.";
