//! Client-side error taxonomy.
//!
//! Every failure a flow can hit ends up as a [`ClientError`]. Its `Display`
//! text is exactly what the user is shown in the blocking notification, so
//! the frontend never formats error messages itself.

use std::fmt;
use thiserror::Error;

/// The backend action a logical failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GenerateResume,
    GenerateCoverLetter,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::GenerateResume => f.write_str("resume"),
            Action::GenerateCoverLetter => f.write_str("cover letter"),
        }
    }
}

/// Something a download action needs to have been generated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Resume,
    CoverLetter,
    Portfolio,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Resume => f.write_str("resume"),
            Artifact::CoverLetter => f.write_str("cover letter"),
            Artifact::Portfolio => f.write_str("portfolio"),
        }
    }
}

/// Coarse classification used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected locally, no request was issued.
    Validation,
    /// The backend answered but reported a failure.
    Backend,
    /// Network, status or decoding failure, or a failing browser API.
    Transport,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Invalid JSON format for projects")]
    InvalidProjects(#[source] serde_json::Error),

    #[error("Please generate a {0} first")]
    NothingGenerated(Artifact),

    #[error("Error generating {action}: {message}")]
    Rejected { action: Action, message: String },

    #[error("Error downloading PDF")]
    DownloadStatus(u16),

    #[error("Error: {0}")]
    Transport(String),

    #[error("Error: {0}")]
    Browser(String),

    #[error("Failed to copy: {0}")]
    Clipboard(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::MissingFields
            | ClientError::InvalidProjects(_)
            | ClientError::NothingGenerated(_) => ErrorKind::Validation,
            ClientError::Rejected { .. } => ErrorKind::Backend,
            ClientError::DownloadStatus(_)
            | ClientError::Transport(_)
            | ClientError::Browser(_)
            | ClientError::Clipboard(_) => ErrorKind::Transport,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_names_the_action() {
        let err = ClientError::Rejected {
            action: Action::GenerateCoverLetter,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error generating cover letter: quota exceeded"
        );
        assert_eq!(err.kind(), ErrorKind::Backend);
    }

    #[test]
    fn test_nothing_generated_is_validation() {
        let err = ClientError::NothingGenerated(Artifact::Portfolio);
        assert_eq!(err.to_string(), "Please generate a portfolio first");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_download_status_hides_code_from_user() {
        let err = ClientError::DownloadStatus(502);
        assert_eq!(err.to_string(), "Error downloading PDF");
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_json_errors_become_transport() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ClientError::from(parse);
        assert!(err.to_string().starts_with("Error: "));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
