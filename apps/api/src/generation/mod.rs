// Content generation: provider-backed routing with a deterministic fallback.
// All provider calls go through llm_client — no direct API calls here.

pub mod fallback;
pub mod generator;
pub mod handlers;
