//! Markup generation for the résumé preview and the standalone portfolio.
//!
//! Both renderers build plain strings; the caller decides where they end up
//! (`innerHTML` of the preview, `srcdoc` of the portfolio frame, a download).
//! Every interpolated value goes through an [`Interpolation`] chosen by the
//! caller, which is the single point where backend or user content is either
//! trusted as markup or escaped.

use std::borrow::Cow;

pub mod portfolio;
pub mod resume;

/// How interpolated values are inserted into generated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// Values are inserted verbatim. Only for content already known to be
    /// sanitized: any markup inside it becomes live in the page.
    Trusted,
    /// Values are HTML-escaped and always render as text.
    Escaped,
}

impl Interpolation {
    pub fn apply<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self {
            Interpolation::Trusted => Cow::Borrowed(value),
            Interpolation::Escaped => Cow::Owned(escape_html(value)),
        }
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'`, which is enough for both text nodes
/// and double-quoted attribute values.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Splits a comma separated skills field into trimmed, non-empty entries.
pub fn split_skills(skills: &str) -> Vec<&str> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_covers_attribute_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">O'Neil & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#39;Neil &amp; co&lt;/a&gt;"
        );
    }

    #[test]
    fn test_trusted_borrows_verbatim() {
        let value = "<b>bold</b>";
        assert!(matches!(
            Interpolation::Trusted.apply(value),
            Cow::Borrowed("<b>bold</b>")
        ));
        assert_eq!(Interpolation::Escaped.apply(value), "&lt;b&gt;bold&lt;/b&gt;");
    }

    #[test]
    fn test_split_skills_trims_and_drops_blanks() {
        assert_eq!(split_skills(" Go,Python ,, Rust ,"), vec!["Go", "Python", "Rust"]);
        assert!(split_skills(" , ").is_empty());
    }
}
