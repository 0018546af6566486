//! Structured field extraction from freeform resume text.
//!
//! Preferred path asks the configured provider for the full structured
//! profile; any failure falls through to the deterministic heuristics.

pub mod handlers;
pub mod heuristics;

use tracing::warn;

use crate::extract::heuristics::{extract_profile, ExtractedProfile};
use crate::llm_client::prompts::EXTRACTION_SYSTEM;
use crate::llm_client::{ContentSource, ProviderClient};

const EXTRACTION_MAX_TOKENS: u32 = 1500;
const EXTRACTION_TEMPERATURE: f32 = 0.1;
/// Only the leading slice of the document is sent to the provider.
const EXTRACTION_INPUT_CHARS: usize = 3000;

const EXTRACTION_PROMPT: &str = "Extract the following information from this resume/document text:\n\
    - name: Full name of the person\n\
    - title: Current or desired professional title\n\
    - email: Email address\n\
    - phone: Phone number\n\
    - location: City, State/Country\n\
    - summary: Professional summary (2-3 sentences)\n\
    - skills: List of skills (array)\n\
    - experience: Array of work experiences with {title, company, duration, description}\n\
    - education: Array of education with {degree, institution, year, info}\n\
    \n\
    Return ONLY valid JSON with these keys. If a field is not found, use empty string or empty array.";

/// Extracts a profile, preferring the provider when one is configured.
pub async fn extract_content(
    provider: &ProviderClient,
    content: &str,
) -> (ExtractedProfile, ContentSource) {
    if provider.is_available() {
        let snippet: String = content.chars().take(EXTRACTION_INPUT_CHARS).collect();
        let prompt = format!("{EXTRACTION_PROMPT}\n\nResume text:\n{snippet}");

        match provider
            .call_json::<ExtractedProfile>(
                &prompt,
                EXTRACTION_SYSTEM,
                EXTRACTION_MAX_TOKENS,
                EXTRACTION_TEMPERATURE,
            )
            .await
        {
            Ok(profile) => return (profile, ContentSource::Provider),
            Err(e) => warn!("Provider extraction failed, using heuristics: {e}"),
        }
    }

    (extract_profile(content), ContentSource::Fallback)
}
