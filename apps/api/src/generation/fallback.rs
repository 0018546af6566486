//! Deterministic fallback content — canned templates keyed by experience
//! level. Used whenever no provider is configured or a provider call fails.
//!
//! Fully deterministic: identical requests always yield identical output.
//! The template wording is part of the external contract; change with care.

use crate::generation::generator::{non_empty, ExperienceLevel, GeneratedContent, GenerationRequest};

/// Base skill list appended after any request keywords.
const BASE_SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "React",
    "Node.js",
    "AWS",
    "Docker",
    "Git",
    "Agile",
    "Leadership",
    "Communication",
];

/// Leading keywords spliced ahead of the base skills.
const MAX_KEYWORD_SKILLS: usize = 5;
/// Base skills kept when keywords are supplied.
const BASE_SKILLS_WITH_KEYWORDS: usize = 5;

/// Builds resume content from fixed templates. Pure and synchronous.
pub fn generate_fallback_content(request: &GenerationRequest) -> GeneratedContent {
    let role = if request.role.trim().is_empty() {
        "Professional"
    } else {
        request.role.trim()
    };
    let level = ExperienceLevel::parse(&request.experience_level);
    let keywords = non_empty(&request.keywords);
    let industry = non_empty(&request.industry);

    let (summary, experience_bullets) = match level {
        ExperienceLevel::Junior => (
            format!(
                "Motivated {role} with strong foundation in {}. \
                 Eager to contribute to innovative projects and grow expertise in a collaborative environment.",
                keywords.unwrap_or("modern technologies")
            ),
            vec![
                format!(
                    "Developed and maintained features using {}",
                    keywords.unwrap_or("industry-standard tools")
                ),
                "Collaborated with senior developers to implement best practices".to_string(),
                "Participated in code reviews and technical documentation".to_string(),
                "Assisted in debugging and resolving technical issues".to_string(),
                "Completed all assigned tasks on schedule".to_string(),
            ],
        ),
        ExperienceLevel::Mid => (
            format!(
                "Experienced {role} with proven track record in {}. \
                 Skilled in {} with focus on quality and performance.",
                industry.unwrap_or("technology"),
                keywords.unwrap_or("full-stack development")
            ),
            vec![
                format!(
                    "Led development of key features using {}",
                    keywords.unwrap_or("modern tech stack")
                ),
                "Mentored junior developers and conducted code reviews".to_string(),
                "Architected scalable solutions handling 10K+ users".to_string(),
                "Collaborated with product managers on requirements".to_string(),
                "Improved deployment efficiency by 40%".to_string(),
            ],
        ),
        ExperienceLevel::Senior => (
            format!(
                "Senior {role} with extensive expertise in {}. \
                 Proven leader in driving technical innovation and delivering complex projects.",
                keywords.unwrap_or("enterprise solutions")
            ),
            vec![
                format!(
                    "Architected enterprise solutions using {}",
                    keywords.unwrap_or("cloud technologies")
                ),
                "Led team of 8+ developers delivering critical projects".to_string(),
                "Established coding standards adopted organization-wide".to_string(),
                "Reduced operational costs by 35% through optimization".to_string(),
                "Presented strategies to C-level executives".to_string(),
            ],
        ),
        ExperienceLevel::Executive => (
            format!(
                "Visionary technology executive and {role} with track record of transformation. \
                 Expert in {} and team building.",
                keywords.unwrap_or("digital innovation")
            ),
            vec![
                "Directed technology strategy driving 50% efficiency increase".to_string(),
                "Built engineering organization from 10 to 100+ professionals".to_string(),
                "Secured $10M+ in cost savings through optimization".to_string(),
                "Launched products generating $25M+ revenue".to_string(),
                "Established strategic technology partnerships".to_string(),
            ],
        ),
    };

    let skills = build_skills(keywords);

    let project_count = if level == ExperienceLevel::Junior { 5 } else { 15 };
    let achievements = vec![
        "Increased team productivity by 25%".to_string(),
        format!("Delivered {project_count}+ successful projects"),
        "Received excellence award for outstanding performance".to_string(),
    ];

    GeneratedContent {
        summary,
        experience_bullets,
        skills,
        achievements,
    }
}

/// With keywords: up to 5 leading keywords followed by the first 5 base
/// skills. Without: the full base list. Duplicates are not removed.
fn build_skills(keywords: Option<&str>) -> Vec<String> {
    match keywords {
        Some(kw) => {
            let mut skills: Vec<String> = kw
                .split(',')
                .map(|s| s.trim().to_string())
                .take(MAX_KEYWORD_SKILLS)
                .collect();
            skills.extend(
                BASE_SKILLS
                    .iter()
                    .take(BASE_SKILLS_WITH_KEYWORDS)
                    .map(|s| s.to_string()),
            );
            skills
        }
        None => BASE_SKILLS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: &str, level: &str, keywords: Option<&str>) -> GenerationRequest {
        GenerationRequest {
            role: role.to_string(),
            company: None,
            keywords: keywords.map(str::to_string),
            experience_level: level.to_string(),
            industry: None,
            tone: "professional".to_string(),
        }
    }

    #[test]
    fn test_identical_requests_yield_identical_output() {
        let req = request("Software Engineer", "senior", Some("Rust,Kubernetes"));
        assert_eq!(
            generate_fallback_content(&req),
            generate_fallback_content(&req)
        );
    }

    #[test]
    fn test_each_level_produces_distinct_summary() {
        let summaries: Vec<String> = ["junior", "mid", "senior", "executive"]
            .iter()
            .map(|level| generate_fallback_content(&request("Engineer", level, None)).summary)
            .collect();
        for i in 0..summaries.len() {
            for j in (i + 1)..summaries.len() {
                assert_ne!(summaries[i], summaries[j]);
            }
        }
    }

    #[test]
    fn test_unknown_level_matches_mid() {
        let unknown = generate_fallback_content(&request("Engineer", "wizard", None));
        let mid = generate_fallback_content(&request("Engineer", "mid", None));
        assert_eq!(unknown, mid);
    }

    #[test]
    fn test_keywords_lead_the_skill_list() {
        let content = generate_fallback_content(&request(
            "Software Engineer",
            "mid",
            Some("Go,Docker"),
        ));
        assert_eq!(content.skills[0], "Go");
        assert_eq!(content.skills[1], "Docker");
        // 2 keywords + first 5 base skills
        assert_eq!(content.skills.len(), 7);
    }

    #[test]
    fn test_keyword_splice_caps_at_five() {
        let content = generate_fallback_content(&request(
            "Engineer",
            "mid",
            Some("a,b,c,d,e,f,g"),
        ));
        assert_eq!(content.skills.len(), 10);
        assert_eq!(content.skills[4], "e");
        assert_eq!(content.skills[5], "Python");
    }

    #[test]
    fn test_no_keywords_uses_full_base_list() {
        let content = generate_fallback_content(&request("Engineer", "mid", None));
        assert_eq!(content.skills.len(), BASE_SKILLS.len());
        assert_eq!(content.skills[0], "Python");
    }

    #[test]
    fn test_summary_contains_role() {
        let content = generate_fallback_content(&request("Product Manager", "senior", None));
        assert!(content.summary.contains("Product Manager"));
    }

    #[test]
    fn test_empty_role_falls_back_to_professional() {
        let content = generate_fallback_content(&request("", "mid", None));
        assert!(content.summary.contains("Professional"));
    }

    #[test]
    fn test_achievement_magnitude_depends_on_level() {
        let junior = generate_fallback_content(&request("Engineer", "junior", None));
        let senior = generate_fallback_content(&request("Engineer", "senior", None));
        assert!(junior.achievements[1].contains("5+"));
        assert!(senior.achievements[1].contains("15+"));
    }

    #[test]
    fn test_bullet_count_is_five_for_every_level() {
        for level in ["junior", "mid", "senior", "executive"] {
            let content = generate_fallback_content(&request("Engineer", level, None));
            assert_eq!(content.experience_bullets.len(), 5, "level {level}");
        }
    }
}
