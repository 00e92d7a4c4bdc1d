//! Reply envelopes of the generation endpoints.
//!
//! Both generation routes answer `{ "success": bool, ... }` whatever the HTTP
//! status: the payload on success, an `error` string otherwise. The envelopes
//! decode leniently and [`GenerateResumeReply::into_result`] /
//! [`CoverLetterReply::into_result`] turn them into the flow outcome.

use serde::Deserialize;

use crate::error::{Action, ClientError};
use crate::model::resume::{PersonalInfo, ResumeDocument, ResumeSnapshot};

const UNKNOWN_ERROR: &str = "unknown error";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResumeReply {
    #[serde(default)]
    pub success: bool,
    pub resume: Option<ResumeDocument>,
    pub personal_info: Option<PersonalInfo>,
    pub error: Option<String>,
}

impl GenerateResumeReply {
    pub fn from_json(body: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(body)?)
    }

    /// A `success: true` reply missing its payload cannot be rendered and is
    /// reported like any other malformed response.
    pub fn into_result(self) -> Result<ResumeSnapshot, ClientError> {
        if !self.success {
            return Err(ClientError::Rejected {
                action: Action::GenerateResume,
                message: self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            });
        }

        match (self.resume, self.personal_info) {
            (Some(resume_data), Some(personal_info)) => Ok(ResumeSnapshot {
                resume_data,
                personal_info,
            }),
            (None, _) => Err(ClientError::Transport(
                "response is missing the resume".to_string(),
            )),
            (_, None) => Err(ClientError::Transport(
                "response is missing the personal info".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterReply {
    #[serde(default)]
    pub success: bool,
    pub cover_letter: Option<String>,
    pub error: Option<String>,
}

impl CoverLetterReply {
    pub fn from_json(body: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn into_result(self) -> Result<String, ClientError> {
        if !self.success {
            return Err(ClientError::Rejected {
                action: Action::GenerateCoverLetter,
                message: self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            });
        }

        self.cover_letter.ok_or_else(|| {
            ClientError::Transport("response is missing the cover letter".to_string())
        })
    }
}
