use serde::{Deserialize, Serialize};

/// Runtime settings of the web client.
///
/// There is no environment to read from inside the browser, so the defaults
/// are the deployed values and a host page may hand a different instance to
/// the root component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix put in front of every `/api/...` path. Empty means same origin.
    pub api_base: String,
    pub resume_file_name: String,
    pub portfolio_file_name: String,
    pub cover_letter_file_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            resume_file_name: "resume.pdf".to_string(),
            portfolio_file_name: "portfolio.html".to_string(),
            cover_letter_file_name: "cover_letter.txt".to_string(),
        }
    }
}

impl ClientConfig {
    /// Joins `api_base` and an absolute endpoint path without doubling the slash.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
