use anyhow::{Context, Result};

/// Which external AI provider to route generation/extraction calls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Anthropic,
    /// No external provider — deterministic fallback paths only.
    Mock,
}

impl Provider {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "openai" => Provider::OpenAi,
            "anthropic" => Provider::Anthropic,
            _ => Provider::Mock,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Mock => "mock",
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// Read once at startup and passed into constructors explicitly — no module
/// reads the environment after this point.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: Provider,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            provider: Provider::parse(
                &std::env::var("AI_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
            ),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse_known_values() {
        assert_eq!(Provider::parse("openai"), Provider::OpenAi);
        assert_eq!(Provider::parse("Anthropic"), Provider::Anthropic);
        assert_eq!(Provider::parse("mock"), Provider::Mock);
    }

    #[test]
    fn test_provider_parse_unknown_falls_back_to_mock() {
        assert_eq!(Provider::parse("gemini"), Provider::Mock);
        assert_eq!(Provider::parse(""), Provider::Mock);
    }
}
