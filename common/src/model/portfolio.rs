use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Raw contents of the portfolio form. `projects` is JSON text typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioInput {
    pub name: String,
    pub bio: String,
    pub skills: String,
    pub projects: String,
}

/// One project card of the generated portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioProject {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
    pub link: String,
}

impl PortfolioInput {
    /// Checks that every field is filled in and decodes the projects list.
    ///
    /// Emptiness is checked on the raw value, so a field holding only spaces
    /// counts as filled. The projects text must be a JSON array of objects.
    pub fn parse_projects(&self) -> Result<Vec<PortfolioProject>, ClientError> {
        let fields = [&self.name, &self.bio, &self.skills, &self.projects];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(ClientError::MissingFields);
        }

        serde_json::from_str(&self.projects).map_err(ClientError::InvalidProjects)
    }
}
