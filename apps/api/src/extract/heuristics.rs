//! Heuristic field extraction — regex and line-scan scraping of name, email,
//! phone, summary, and skills from unstructured resume text.
//!
//! Deterministic and best-effort: a field that cannot be located is an empty
//! string/sequence, never an error. The thresholds here (50-char name line,
//! 500-char summary, 10–30-char skill fragments, windows of 3/4 lines) are
//! fixed constants that determine output equality; do not tune them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern")
});

/// Loose phone pattern: optional country code, separators, 4 digit groups.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\+]?[(]?[0-9]{1,3}[)]?[-.\s]?[(]?[0-9]{1,4}[)]?[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,9}")
        .expect("phone pattern")
});

static SKILL_DELIMITER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;\u{2022}\u{00b7}|]").expect("skill delimiter pattern"));

const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "profile", "about"];
const SKILLS_KEYWORDS: &[&str] = &["skills", "technologies", "competencies", "expertise"];

const NAME_MAX_CHARS: usize = 50;
const SUMMARY_MAX_CHARS: usize = 500;
const SUMMARY_WINDOW_LINES: usize = 3;
const SKILLS_WINDOW_LINES: usize = 4;
const SKILL_MIN_CHARS: usize = 10;
const SKILL_MAX_CHARS: usize = 30;
const MAX_SKILLS: usize = 15;
const SUMMARY_FALLBACK_TOKENS: usize = 100;

/// Best-effort structured profile. Also the wire shape for the provider
/// extraction path, so every field tolerates being absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-form records: {title, company, duration, description}.
    #[serde(default)]
    pub experience: Vec<Value>,
    /// Free-form records: {degree, institution, year, info}.
    #[serde(default)]
    pub education: Vec<Value>,
}

/// Runs the full heuristic pipeline over raw text.
pub fn extract_profile(content: &str) -> ExtractedProfile {
    let lines: Vec<&str> = content.lines().collect();
    let mut profile = ExtractedProfile::default();

    if let Some(m) = EMAIL_RE.find(content) {
        profile.email = m.as_str().to_string();
    }

    if let Some(m) = PHONE_RE.find(content) {
        profile.phone = m.as_str().to_string();
    }

    profile.name = find_name(&lines);
    profile.summary = find_summary(&lines);
    profile.skills = find_skills(&lines);

    // No summary section found: first 100 whitespace tokens of the document.
    if profile.summary.is_empty() {
        profile.summary = content
            .split_whitespace()
            .take(SUMMARY_FALLBACK_TOKENS)
            .collect::<Vec<_>>()
            .join(" ");
    }

    profile
}

/// The name is taken to be the first short non-empty line that does not look
/// like contact or link data.
fn find_name(lines: &[&str]) -> String {
    lines
        .iter()
        .find(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty()
                && trimmed.chars().count() < NAME_MAX_CHARS
                && !line.contains('@')
                && !line.contains("http")
                && !line.contains("www")
        })
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}

/// Scans for a summary/objective header and joins the next few non-empty
/// lines, truncated to 500 characters.
fn find_summary(lines: &[&str]) -> String {
    for (i, line) in lines.iter().enumerate() {
        let lower = line.to_lowercase();
        if SUMMARY_KEYWORDS.iter().any(|k| lower.contains(k)) {
            let joined = lines
                .iter()
                .skip(i + 1)
                .take(SUMMARY_WINDOW_LINES)
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            return truncate_chars(&joined, SUMMARY_MAX_CHARS);
        }
    }
    String::new()
}

/// Scans for a skills header, splits the following lines on common
/// delimiters, and keeps fragments of plausible skill length.
fn find_skills(lines: &[&str]) -> Vec<String> {
    for (i, line) in lines.iter().enumerate() {
        let lower = line.to_lowercase();
        if SKILLS_KEYWORDS.iter().any(|k| lower.contains(k)) {
            let window = lines
                .iter()
                .skip(i + 1)
                .take(SKILLS_WINDOW_LINES)
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            return SKILL_DELIMITER_RE
                .split(&window)
                .map(str::trim)
                .filter(|s| {
                    let len = s.chars().count();
                    len > SKILL_MIN_CHARS && len < SKILL_MAX_CHARS
                })
                .take(MAX_SKILLS)
                .map(str::to_string)
                .collect();
        }
    }
    Vec::new()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
Jane Doe
jane.doe@example.com
+1 (555) 123-4567
San Francisco, CA

Professional Summary
Seasoned platform engineer with a decade of experience.
Focused on reliability and developer tooling.

Skills
Distributed systems, Kubernetes operations; Infrastructure as code | Performance profiling
Observability tooling, CI/CD pipeline design
";

    #[test]
    fn test_email_and_phone_are_extracted() {
        let profile = extract_profile(SAMPLE_RESUME);
        assert_eq!(profile.email, "jane.doe@example.com");
        assert!(profile.phone.contains("555"));
    }

    #[test]
    fn test_missing_email_and_phone_are_empty() {
        let profile = extract_profile("Just a plain paragraph with no contact data at all");
        assert_eq!(profile.email, "");
        assert_eq!(profile.phone, "");
    }

    #[test]
    fn test_name_is_first_short_clean_line() {
        let profile = extract_profile(SAMPLE_RESUME);
        assert_eq!(profile.name, "Jane Doe");
    }

    #[test]
    fn test_name_skips_lines_with_links_and_emails() {
        let text = "www.janedoe.dev\njane@doe.dev\nJane Doe\n";
        let profile = extract_profile(text);
        assert_eq!(profile.name, "Jane Doe");
    }

    #[test]
    fn test_name_skips_overlong_lines() {
        let long_line = "x".repeat(60);
        let text = format!("{long_line}\nShort Name\n");
        assert_eq!(extract_profile(&text).name, "Short Name");
    }

    #[test]
    fn test_summary_section_is_found() {
        let profile = extract_profile(SAMPLE_RESUME);
        assert!(profile.summary.starts_with("Seasoned platform engineer"));
        assert!(profile.summary.contains("developer tooling"));
    }

    #[test]
    fn test_summary_truncated_to_500_chars() {
        let body = "w".repeat(400);
        let text = format!("Objective\n{body}\n{body}\n");
        let profile = extract_profile(&text);
        assert_eq!(profile.summary.chars().count(), 500);
    }

    #[test]
    fn test_summary_falls_back_to_leading_tokens() {
        let text = "no section headers here just plain words ".repeat(30);
        let profile = extract_profile(&text);
        assert_eq!(profile.summary.split_whitespace().count(), 100);
    }

    #[test]
    fn test_skills_split_on_delimiters_and_length_filtered() {
        let profile = extract_profile(SAMPLE_RESUME);
        assert!(profile
            .skills
            .contains(&"Distributed systems".to_string()));
        assert!(profile
            .skills
            .contains(&"Kubernetes operations".to_string()));
        // "CI/CD pipeline design" survives; fragments under 11 chars do not.
        assert!(!profile.skills.iter().any(|s| s.chars().count() <= 10));
        assert!(profile.skills.len() <= 15);
    }

    #[test]
    fn test_no_skills_section_leaves_skills_empty() {
        let profile = extract_profile("Jane Doe\nA paragraph without relevant headers.\n");
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_experience_and_education_stay_empty() {
        let profile = extract_profile(SAMPLE_RESUME);
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(extract_profile(SAMPLE_RESUME), extract_profile(SAMPLE_RESUME));
    }
}
