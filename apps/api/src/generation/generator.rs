//! Content Generation Router — routes a generation request to the configured
//! provider, falling back silently to deterministic templates on any failure.
//!
//! Provider failures are a policy decision here, not an error path: the
//! caller always receives content, tagged with the `ContentSource` that
//! produced it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::generation::fallback::generate_fallback_content;
use crate::llm_client::prompts::GENERATION_SYSTEM;
use crate::llm_client::{ContentSource, ProviderClient, ProviderError};

const GENERATION_MAX_TOKENS: u32 = 1000;
const GENERATION_TEMPERATURE: f32 = 0.7;

/// Seniority band for a generation request. Unrecognized input falls back
/// to `Mid` — never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "junior" => ExperienceLevel::Junior,
            "senior" => ExperienceLevel::Senior,
            "executive" => ExperienceLevel::Executive,
            _ => ExperienceLevel::Mid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Executive => "executive",
        }
    }
}

/// Request body for content generation.
///
/// `role` is the only required field; the handler rejects empty roles with
/// 400 before this reaches the router.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: Option<String>,
    /// Comma-separated keyword string, spliced into fallback skills.
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default = "default_tone")]
    pub tone: String,
}

fn default_experience_level() -> String {
    "mid".to_string()
}

fn default_tone() -> String {
    "professional".to_string()
}

/// Generated resume content, returned to the caller as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedContent {
    pub summary: String,
    pub experience_bullets: Vec<String>,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
}

/// Provider wire shape: the prompt asks for {summary, bullets, skills,
/// achievements}. Missing keys default to empty rather than failing.
#[derive(Debug, Deserialize)]
struct ProviderContent {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    bullets: Vec<String>,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    achievements: Vec<String>,
}

/// Generates resume content, preferring the provider when one is configured.
///
/// Any provider failure (network, API error, malformed JSON) is logged and
/// recovered by the deterministic fallback — never surfaced to the caller.
pub async fn generate_content(
    provider: &ProviderClient,
    request: &GenerationRequest,
) -> (GeneratedContent, ContentSource) {
    if !provider.is_available() {
        return (generate_fallback_content(request), ContentSource::Fallback);
    }

    match generate_with_provider(provider, request).await {
        Ok(content) => (content, ContentSource::Provider),
        Err(e) => {
            warn!("Provider generation failed, using fallback: {e}");
            (generate_fallback_content(request), ContentSource::Fallback)
        }
    }
}

async fn generate_with_provider(
    provider: &ProviderClient,
    request: &GenerationRequest,
) -> Result<GeneratedContent, ProviderError> {
    let prompt = build_generation_prompt(request);

    let content: ProviderContent = provider
        .call_json(
            &prompt,
            GENERATION_SYSTEM,
            GENERATION_MAX_TOKENS,
            GENERATION_TEMPERATURE,
        )
        .await?;

    Ok(GeneratedContent {
        summary: content.summary,
        experience_bullets: content.bullets,
        skills: content.skills,
        achievements: content.achievements,
    })
}

fn build_generation_prompt(request: &GenerationRequest) -> String {
    let level = ExperienceLevel::parse(&request.experience_level);

    let mut prompt = format!(
        "Generate professional resume content for a {}-level {}.\n",
        level.as_str(),
        request.role
    );
    if let Some(company) = non_empty(&request.company) {
        prompt.push_str(&format!("Target company: {company}\n"));
    }
    if let Some(industry) = non_empty(&request.industry) {
        prompt.push_str(&format!("Industry: {industry}\n"));
    }
    if let Some(keywords) = non_empty(&request.keywords) {
        prompt.push_str(&format!("Key skills/keywords: {keywords}\n"));
    }
    prompt.push_str(&format!("Tone: {}\n", request.tone));
    prompt.push_str(
        "\nReturn JSON with these exact keys:\n\
         - summary: A compelling professional summary (2-3 sentences)\n\
         - bullets: Array of 5 achievement-focused bullet points\n\
         - skills: Array of 10-12 relevant skills\n\
         - achievements: Array of 3 key achievements\n",
    );
    prompt
}

/// Treats `None` and whitespace-only strings the same way.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Provider};

    fn mock_provider() -> ProviderClient {
        ProviderClient::from_config(&Config {
            provider: Provider::Mock,
            openai_api_key: None,
            anthropic_api_key: None,
            port: 5000,
            rust_log: "info".to_string(),
        })
    }

    fn request(role: &str) -> GenerationRequest {
        GenerationRequest {
            role: role.to_string(),
            company: None,
            keywords: None,
            experience_level: "mid".to_string(),
            industry: None,
            tone: "professional".to_string(),
        }
    }

    #[test]
    fn test_experience_level_parse_known() {
        assert_eq!(ExperienceLevel::parse("junior"), ExperienceLevel::Junior);
        assert_eq!(ExperienceLevel::parse("Senior"), ExperienceLevel::Senior);
        assert_eq!(
            ExperienceLevel::parse("EXECUTIVE"),
            ExperienceLevel::Executive
        );
    }

    #[test]
    fn test_experience_level_unknown_falls_back_to_mid() {
        assert_eq!(ExperienceLevel::parse("principal"), ExperienceLevel::Mid);
        assert_eq!(ExperienceLevel::parse(""), ExperienceLevel::Mid);
    }

    #[tokio::test]
    async fn test_no_provider_routes_to_fallback() {
        let provider = mock_provider();
        let (content, source) = generate_content(&provider, &request("Software Engineer")).await;
        assert_eq!(source, ContentSource::Fallback);
        assert!(content.summary.contains("Software Engineer"));
    }

    #[tokio::test]
    async fn test_fallback_route_is_deterministic() {
        let provider = mock_provider();
        let req = request("Data Analyst");
        let (first, _) = generate_content(&provider, &req).await;
        let (second, _) = generate_content(&provider, &req).await;
        assert_eq!(first, second);
    }

    #[test]
    fn test_prompt_includes_optional_fields_only_when_present() {
        let mut req = request("Engineer");
        let prompt = build_generation_prompt(&req);
        assert!(!prompt.contains("Target company"));
        assert!(!prompt.contains("Industry:"));

        req.company = Some("Acme".to_string());
        req.industry = Some("fintech".to_string());
        let prompt = build_generation_prompt(&req);
        assert!(prompt.contains("Target company: Acme"));
        assert!(prompt.contains("Industry: fintech"));
    }
}
