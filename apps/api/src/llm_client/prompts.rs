// Shared system prompts for provider calls.
// Each feature module builds its own user prompt alongside its code; these
// are the cross-cutting fragments.

/// System prompt for resume content generation.
pub const GENERATION_SYSTEM: &str =
    "You are an expert resume writer. Return only valid JSON.";

/// System prompt for structured extraction from freeform resume text.
pub const EXTRACTION_SYSTEM: &str =
    "You are a resume parser. Extract information and return only valid JSON.";
