//! ATS Scorer — keyword-overlap compatibility score with structural checks.
//!
//! Algorithm: base 75 without a job description. With one, score =
//! round(70 + overlap × 30) where overlap is |jd ∩ resume| / |jd| over
//! lowercased whitespace tokens. Length and section-header penalties apply
//! afterwards; the final score is clamped to [0, 100].

use std::collections::HashSet;

use serde::Serialize;

/// Score at or above this threshold reports "good".
const GOOD_SCORE_THRESHOLD: i32 = 70;

const BASE_SCORE: i32 = 75;
/// Resumes shorter than this many characters lose 10 points.
const MIN_RESUME_CHARS: usize = 300;
/// Resumes longer than this many characters lose 5 points.
const MAX_RESUME_CHARS: usize = 3000;
/// Overlap below this triggers the keyword suggestion.
const LOW_MATCH_RATE: f64 = 0.3;

const SECTION_HEADERS: &[&str] = &["experience", "education", "skills"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsStatus {
    Good,
    NeedsImprovement,
}

#[derive(Debug, Clone, Serialize)]
pub struct AtsReport {
    pub score: i32,
    pub suggestions: Vec<String>,
    pub status: AtsStatus,
}

/// Scores a resume for ATS compatibility against an optional job description.
pub fn analyze_ats(resume_text: &str, job_description: &str) -> AtsReport {
    let mut score = BASE_SCORE;
    let mut suggestions = Vec::new();

    if !job_description.is_empty() {
        let job_words: HashSet<String> = tokenize(job_description);
        let resume_words: HashSet<String> = tokenize(resume_text);

        let match_rate = if job_words.is_empty() {
            0.0
        } else {
            job_words.intersection(&resume_words).count() as f64 / job_words.len() as f64
        };
        score = (70.0 + match_rate * 30.0).round() as i32;

        if match_rate < LOW_MATCH_RATE {
            suggestions.push("Add more keywords from the job description".to_string());
        }
    }

    let resume_chars = resume_text.chars().count();
    if resume_chars < MIN_RESUME_CHARS {
        suggestions.push("Resume seems too short. Add more detail.".to_string());
        score -= 10;
    }
    if resume_chars > MAX_RESUME_CHARS {
        suggestions.push("Resume may be too long. Consider trimming it down.".to_string());
        score -= 5;
    }

    let resume_lower = resume_text.to_lowercase();
    if !SECTION_HEADERS.iter().any(|h| resume_lower.contains(h)) {
        suggestions.push("Include standard section headers".to_string());
        score -= 15;
    }

    let score = score.clamp(0, 100);
    let status = if score >= GOOD_SCORE_THRESHOLD {
        AtsStatus::Good
    } else {
        AtsStatus::NeedsImprovement
    };

    AtsReport {
        score,
        suggestions,
        status,
    }
}

fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
