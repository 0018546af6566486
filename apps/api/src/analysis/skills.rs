//! Skill Suggestion — fixed category map keyed by role substring.

/// Category keyword → suggested skills, checked in order against the
/// lowercased role. First match wins.
const SKILL_MAP: &[(&str, &[&str])] = &[
    (
        "software",
        &["Python", "JavaScript", "React", "Node.js", "Git", "Docker", "AWS"],
    ),
    (
        "data",
        &["Python", "SQL", "Pandas", "NumPy", "Tableau", "Machine Learning"],
    ),
    (
        "design",
        &["Figma", "Adobe Creative Suite", "UI/UX", "Wireframing"],
    ),
    (
        "marketing",
        &["SEO", "Google Analytics", "Content Strategy", "Social Media"],
    ),
];

const DEFAULT_SKILLS: &[&str] = &["Communication", "Problem Solving", "Leadership", "Teamwork"];

const MAX_SUGGESTIONS: usize = 10;

/// Suggests up to 10 skills for a role, excluding any already held.
pub fn suggest_skills(role: &str, current_skills: &[String]) -> Vec<String> {
    let role_lower = role.to_lowercase();

    let pool = SKILL_MAP
        .iter()
        .find(|(keyword, _)| role_lower.contains(keyword))
        .map(|(_, skills)| *skills)
        .unwrap_or(DEFAULT_SKILLS);

    pool.iter()
        .filter(|skill| !current_skills.iter().any(|c| c == *skill))
        .take(MAX_SUGGESTIONS)
        .map(|s| s.to_string())
        .collect()
}
