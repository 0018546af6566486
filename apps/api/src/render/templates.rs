//! Template Renderer — substitutes content fields into one of a small set of
//! fixed HTML layouts.
//!
//! Contract: an unknown template identifier silently renders as the default
//! ("modern"); missing fields render empty. Skills joining is a per-template
//! presentation choice: modern uses a bullet separator, classic a comma.

use serde::Deserialize;

/// Identifiers of the available templates, in registry order.
pub const TEMPLATE_NAMES: &[&str] = &["modern", "classic"];
pub const DEFAULT_TEMPLATE: &str = "modern";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    Modern,
    Classic,
}

impl TemplateId {
    /// Unknown identifiers fall back to the default template, never an error.
    pub fn parse(s: &str) -> Self {
        match s {
            "classic" => TemplateId::Classic,
            _ => TemplateId::Modern,
        }
    }
}

/// Flat field map interpolated into a template. Every field is optional;
/// absent fields render as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience_bullets: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

const MODERN_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <style>
        body { font-family: 'Segoe UI', Arial, sans-serif; margin: 40px; color: #333; }
        h1 { color: #2563eb; border-bottom: 3px solid #2563eb; padding-bottom: 10px; }
        h2 { color: #1e40af; margin-top: 25px; text-transform: uppercase; font-size: 14px; }
        .section { margin-bottom: 25px; }
        ul { margin-left: 20px; }
    </style>
</head>
<body>
    <h1>{{name}}</h1>
    <div>{{email}} | {{phone}} | {{location}}</div>
    <div class="section">
        <h2>Professional Summary</h2>
        <p>{{summary}}</p>
    </div>
    <div class="section">
        <h2>Experience</h2>
        <ul>
{{experience_bullets}}
        </ul>
    </div>
    <div class="section">
        <h2>Skills</h2>
        <p>{{skills}}</p>
    </div>
</body>
</html>
"#;

const CLASSIC_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <style>
        body { font-family: Georgia, serif; margin: 40px; }
        h1 { text-align: center; }
        h2 { border-bottom: 1px solid #000; }
    </style>
</head>
<body>
    <h1>{{name}}</h1>
    <div style="text-align: center;">{{email}} &bull; {{phone}}</div>
    <h2>Summary</h2>
    <p>{{summary}}</p>
    <h2>Experience</h2>
    <ul>
{{experience_bullets}}
    </ul>
    <h2>Skills</h2>
    <p>{{skills}}</p>
</body>
</html>
"#;

/// Renders the given fields into the selected template.
pub fn render(template: TemplateId, fields: &TemplateFields) -> String {
    let (layout, skills_separator) = match template {
        TemplateId::Modern => (MODERN_TEMPLATE, " \u{2022} "),
        TemplateId::Classic => (CLASSIC_TEMPLATE, ", "),
    };

    let bullets = fields
        .experience_bullets
        .iter()
        .map(|b| format!("        <li>{b}</li>"))
        .collect::<Vec<_>>()
        .join("\n");

    layout
        .replace("{{name}}", &fields.name)
        .replace("{{email}}", &fields.email)
        .replace("{{phone}}", &fields.phone)
        .replace("{{location}}", &fields.location)
        .replace("{{summary}}", &fields.summary)
        .replace("{{experience_bullets}}", &bullets)
        .replace("{{skills}}", &fields.skills.join(skills_separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> TemplateFields {
        TemplateFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            location: "Berlin".to_string(),
            summary: "Seasoned engineer.".to_string(),
            experience_bullets: vec!["Shipped things".to_string(), "Fixed bugs".to_string()],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
        }
    }

    #[test]
    fn test_unknown_template_renders_as_modern() {
        let fields = sample_fields();
        let unknown = render(TemplateId::parse("futuristic"), &fields);
        let modern = render(TemplateId::Modern, &fields);
        assert_eq!(unknown, modern);
    }

    #[test]
    fn test_modern_joins_skills_with_bullet_separator() {
        let html = render(TemplateId::Modern, &sample_fields());
        assert!(html.contains("Rust \u{2022} SQL"));
    }

    #[test]
    fn test_classic_joins_skills_with_comma() {
        let html = render(TemplateId::Classic, &sample_fields());
        assert!(html.contains("Rust, SQL"));
    }

    #[test]
    fn test_bullets_render_as_list_items() {
        let html = render(TemplateId::Modern, &sample_fields());
        assert!(html.contains("<li>Shipped things</li>"));
        assert!(html.contains("<li>Fixed bugs</li>"));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let html = render(TemplateId::Modern, &TemplateFields::default());
        assert!(html.contains("<h1></h1>"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_fields_are_substituted() {
        let html = render(TemplateId::Classic, &sample_fields());
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("jane@example.com"));
        assert!(html.contains("Seasoned engineer."));
    }
}
