use super::{split_skills, Interpolation};
use crate::model::portfolio::PortfolioProject;

const PORTFOLIO_STYLE: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            color: #333;
        }
        .hero {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 100px 20px;
            text-align: center;
        }
        .hero h1 { font-size: 3rem; margin-bottom: 20px; }
        .hero p { font-size: 1.2rem; max-width: 800px; margin: 0 auto; }
        .container { max-width: 1200px; margin: 0 auto; padding: 60px 20px; }
        .section-title {
            font-size: 2rem;
            color: #667eea;
            margin-bottom: 40px;
            text-align: center;
        }
        .skills {
            display: flex;
            flex-wrap: wrap;
            gap: 15px;
            justify-content: center;
            margin-bottom: 60px;
        }
        .skill {
            background: #667eea;
            color: white;
            padding: 10px 20px;
            border-radius: 25px;
            font-size: 1rem;
        }
        .projects {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 30px;
        }
        .project-card {
            background: white;
            border-radius: 10px;
            box-shadow: 0 5px 15px rgba(0,0,0,0.1);
            overflow: hidden;
            transition: transform 0.3s ease;
        }
        .project-card:hover { transform: translateY(-5px); }
        .project-card img { width: 100%; height: 200px; object-fit: cover; }
        .project-content { padding: 20px; }
        .project-title { font-size: 1.4rem; color: #667eea; margin-bottom: 10px; }
        .project-description { color: #666; margin-bottom: 15px; }
        .project-tech { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 15px; }
        .tech-tag {
            background: #f0f0f0;
            padding: 5px 12px;
            border-radius: 15px;
            font-size: 0.85rem;
            color: #555;
        }
        .project-link { display: inline-block; color: #667eea; text-decoration: none; font-weight: 600; }
        .project-link:hover { text-decoration: underline; }
        footer { background: #2c3e50; color: white; text-align: center; padding: 30px; }
"#;

/// Builds the standalone portfolio page.
///
/// The result only depends on its arguments: styling is inline, nothing is
/// loaded from the host page, and the footer year is fixed rather than read
/// from the clock so the same input always yields the same document.
pub fn render_portfolio(
    name: &str,
    bio: &str,
    skills: &str,
    projects: &[PortfolioProject],
    interpolation: Interpolation,
) -> String {
    let v = |value: &str| interpolation.apply(value).into_owned();

    let skill_tags: String = split_skills(skills)
        .into_iter()
        .map(|skill| format!(r#"<div class="skill">{}</div>"#, v(skill)))
        .collect();

    let cards: String = projects
        .iter()
        .map(|project| render_card(project, &v))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - Portfolio</title>
    <style>{style}</style>
</head>
<body>
    <div class="hero">
        <h1>{name}</h1>
        <p>{bio}</p>
    </div>

    <div class="container">
        <h2 class="section-title">Skills</h2>
        <div class="skills">{skill_tags}</div>

        <h2 class="section-title">Projects</h2>
        <div class="projects">{cards}
        </div>
    </div>

    <footer>
        <p>&copy; 2026 {name}. All rights reserved.</p>
    </footer>
</body>
</html>
"#,
        name = v(name),
        bio = v(bio),
        style = PORTFOLIO_STYLE,
        skill_tags = skill_tags,
        cards = cards,
    )
}

fn render_card(project: &PortfolioProject, v: &impl Fn(&str) -> String) -> String {
    let tech: String = project
        .tech
        .iter()
        .map(|t| format!(r#"<span class="tech-tag">{}</span>"#, v(t)))
        .collect();

    format!(
        r#"
            <div class="project-card">
                <img src="{image}" alt="{title}">
                <div class="project-content">
                    <h3 class="project-title">{title}</h3>
                    <p class="project-description">{description}</p>
                    <div class="project-tech">{tech}</div>
                    <a href="{link}" class="project-link" target="_blank" rel="noopener">View Project &rarr;</a>
                </div>
            </div>"#,
        image = v(&project.image),
        title = v(&project.title),
        description = v(&project.description),
        tech = tech,
        link = v(&project.link),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, tech: &[&str]) -> PortfolioProject {
        PortfolioProject {
            title: title.to_string(),
            description: format!("{} description", title),
            image: format!("{}.png", title.to_lowercase()),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            link: format!("https://example.com/{}", title.to_lowercase()),
        }
    }

    #[test]
    fn test_document_is_standalone() {
        let html = render_portfolio("Ada", "Bio", "Rust", &[], Interpolation::Escaped);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<style>"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_hero_and_title_use_name() {
        let html = render_portfolio("Ada", "Writes compilers", "Rust", &[], Interpolation::Escaped);
        assert!(html.contains("<title>Ada - Portfolio</title>"));
        assert!(html.contains("<h1>Ada</h1>"));
        assert!(html.contains("<p>Writes compilers</p>"));
    }

    #[test]
    fn test_one_skill_per_non_empty_segment() {
        let html = render_portfolio("Ada", "Bio", " Rust , C,, Zig ", &[], Interpolation::Escaped);
        assert_eq!(html.matches(r#"<div class="skill">"#).count(), 3);
        assert!(html.contains(r#"<div class="skill">Zig</div>"#));
    }

    #[test]
    fn test_cards_in_array_order_with_tech_tags() {
        let projects = vec![project("Second", &["Go", "SQL"]), project("First", &[])];
        let html = render_portfolio("Ada", "Bio", "Rust", &projects, Interpolation::Escaped);
        assert_eq!(html.matches(r#"class="project-card""#).count(), 2);
        assert_eq!(html.matches(r#"class="tech-tag""#).count(), 2);
        assert!(html.find("Second").unwrap() < html.find("First").unwrap());
        assert!(html.contains(r#"href="https://example.com/second" class="project-link" target="_blank""#));
    }

    #[test]
    fn test_footer_year_is_fixed() {
        let html = render_portfolio("Ada", "Bio", "Rust", &[], Interpolation::Escaped);
        assert!(html.contains("&copy; 2026 Ada. All rights reserved."));
    }

    #[test]
    fn test_escaped_attributes_cannot_break_out() {
        let mut evil = project("X", &[]);
        evil.image = r#"x.png" onerror="alert(1)"#.to_string();
        let html = render_portfolio("Ada", "Bio", "Rust", &[evil], Interpolation::Escaped);
        assert!(!html.contains(r#"onerror="alert(1)""#));
        assert!(html.contains("x.png&quot; onerror=&quot;alert(1)"));
    }
}
