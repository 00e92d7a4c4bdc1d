use super::Interpolation;
use crate::model::resume::{PersonalInfo, ResumeDocument};

/// Renders the résumé preview fragment.
///
/// The header is always emitted. Sections follow in the fixed order summary,
/// skills, experience, education, projects; a section (heading included) is
/// emitted only when its field is present and non-empty. Entries keep the
/// order the backend sent them in.
pub fn render_resume(
    resume: &ResumeDocument,
    personal_info: &PersonalInfo,
    interpolation: Interpolation,
) -> String {
    let v = |value: &str| interpolation.apply(value).into_owned();
    let mut html = String::new();

    html.push_str(&format!(
        r#"<div class="resume-header"><h2 class="resume-name">{}</h2><p class="resume-contact">{} | {}</p></div>"#,
        v(&personal_info.name),
        v(&personal_info.email),
        v(&personal_info.phone)
    ));

    if let Some(summary) = resume.summary.as_deref().filter(|s| !s.is_empty()) {
        push_section(&mut html, "Professional Summary", &format!("<p>{}</p>", v(summary)));
    }

    if let Some(skills) = non_empty(&resume.skills) {
        let tags: String = skills
            .iter()
            .map(|skill| format!(r#"<span class="skill-tag">{}</span>"#, v(skill.trim())))
            .collect();
        push_section(
            &mut html,
            "Skills",
            &format!(r#"<div class="skills-list">{}</div>"#, tags),
        );
    }

    if let Some(experience) = non_empty(&resume.experience) {
        let items: String = experience
            .iter()
            .map(|exp| {
                format!(
                    r#"<div class="experience-item"><div class="item-title">{} - {}</div><div class="item-subtitle">{}</div><div class="item-description">{}</div></div>"#,
                    v(&exp.title),
                    v(&exp.company),
                    v(&exp.duration),
                    v(&exp.description)
                )
            })
            .collect();
        push_section(&mut html, "Experience", &items);
    }

    if let Some(education) = non_empty(&resume.education) {
        let items: String = education
            .iter()
            .map(|edu| {
                let details = edu
                    .details
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .map(|d| format!(r#"<div class="item-description">{}</div>"#, v(d)))
                    .unwrap_or_default();
                format!(
                    r#"<div class="education-item"><div class="item-title">{}</div><div class="item-subtitle">{} - {}</div>{}</div>"#,
                    v(&edu.degree),
                    v(&edu.institution),
                    v(&edu.year),
                    details
                )
            })
            .collect();
        push_section(&mut html, "Education", &items);
    }

    if let Some(projects) = non_empty(&resume.projects) {
        let items: String = projects
            .iter()
            .map(|proj| {
                format!(
                    r#"<div class="project-item"><div class="item-title">{}</div><div class="item-description">{}</div><div class="item-subtitle">Technologies: {}</div></div>"#,
                    v(&proj.name),
                    v(&proj.description),
                    v(&proj.technologies)
                )
            })
            .collect();
        push_section(&mut html, "Projects", &items);
    }

    html
}

fn non_empty<T>(field: &Option<Vec<T>>) -> Option<&[T]> {
    field.as_deref().filter(|items| !items.is_empty())
}

fn push_section(html: &mut String, heading: &str, body: &str) {
    html.push('\n');
    html.push_str(&format!(
        r#"<div class="resume-section"><h3>{}</h3>{}</div>"#,
        heading, body
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resume::{EducationEntry, ExperienceEntry, ProjectEntry};

    fn info() -> PersonalInfo {
        PersonalInfo {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    fn full_document() -> ResumeDocument {
        ResumeDocument {
            summary: Some("Builds things.".to_string()),
            skills: Some(vec!["Go".to_string(), " Python ".to_string()]),
            experience: Some(vec![ExperienceEntry {
                title: "Intern".to_string(),
                company: "Acme".to_string(),
                duration: "2023".to_string(),
                description: "Shipped".to_string(),
            }]),
            education: Some(vec![EducationEntry {
                degree: "BSc".to_string(),
                institution: "Uni".to_string(),
                year: "2024".to_string(),
                details: None,
            }]),
            projects: Some(vec![ProjectEntry {
                name: "Tracker".to_string(),
                description: "Tracks".to_string(),
                technologies: "Rust".to_string(),
            }]),
        }
    }

    fn headings(html: &str) -> Vec<&str> {
        html.split("<h3>")
            .skip(1)
            .filter_map(|rest| rest.split("</h3>").next())
            .collect()
    }

    #[test]
    fn test_header_is_always_rendered() {
        let html = render_resume(&ResumeDocument::default(), &info(), Interpolation::Escaped);
        assert!(html.contains(r#"<h2 class="resume-name">Jane Doe</h2>"#));
        assert!(html.contains("jane@x.com | 555-0100"));
        assert!(headings(&html).is_empty());
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let html = render_resume(&full_document(), &info(), Interpolation::Escaped);
        assert_eq!(
            headings(&html),
            vec!["Professional Summary", "Skills", "Experience", "Education", "Projects"]
        );
    }

    #[test]
    fn test_empty_sequences_and_summary_suppress_sections() {
        let doc = ResumeDocument {
            summary: Some(String::new()),
            skills: Some(vec![]),
            experience: Some(vec![]),
            ..full_document()
        };
        let html = render_resume(&doc, &info(), Interpolation::Escaped);
        assert_eq!(headings(&html), vec!["Education", "Projects"]);
        assert!(!html.contains("skills-list"));
    }

    #[test]
    fn test_skill_tags_are_trimmed() {
        let html = render_resume(&full_document(), &info(), Interpolation::Escaped);
        assert!(html.contains(r#"<span class="skill-tag">Python</span>"#));
        assert_eq!(html.matches(r#"class="skill-tag""#).count(), 2);
    }

    #[test]
    fn test_education_details_only_when_present() {
        let mut doc = full_document();
        let html = render_resume(&doc, &info(), Interpolation::Escaped);
        assert!(html.contains(
            r#"<div class="item-subtitle">Uni - 2024</div></div>"#
        ));

        doc.education = Some(vec![EducationEntry {
            details: Some("Dean's list".to_string()),
            ..doc.education.unwrap().remove(0)
        }]);
        let html = render_resume(&doc, &info(), Interpolation::Trusted);
        assert!(html.contains(r#"<div class="item-description">Dean's list</div>"#));
    }

    #[test]
    fn test_entries_keep_backend_order() {
        let mut doc = full_document();
        doc.projects = Some(vec![
            ProjectEntry { name: "Zeta".to_string(), ..ProjectEntry::default() },
            ProjectEntry { name: "Alpha".to_string(), ..ProjectEntry::default() },
        ]);
        let html = render_resume(&doc, &info(), Interpolation::Escaped);
        let zeta = html.find("Zeta").unwrap();
        let alpha = html.find("Alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_interpolation_decides_markup_safety() {
        let doc = ResumeDocument {
            summary: Some("<script>alert(1)</script>".to_string()),
            ..ResumeDocument::default()
        };
        let escaped = render_resume(&doc, &info(), Interpolation::Escaped);
        assert!(!escaped.contains("<script>"));
        assert!(escaped.contains("&lt;script&gt;"));

        let trusted = render_resume(&doc, &info(), Interpolation::Trusted);
        assert!(trusted.contains("<p><script>alert(1)</script></p>"));
    }
}
