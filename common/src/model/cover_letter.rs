use serde::{Deserialize, Serialize};

/// Form payload for `POST /api/generate-cover-letter`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub name: String,
    pub target_role: String,
    pub company: String,
    pub skills: String,
    pub experience: String,
}
