//! Per-page state shared between a generation flow and its download action.
//!
//! [`Session`] holds the two result caches. Each cache is written only by its
//! generation flow and read only by the matching download, so "nothing
//! generated yet" is an explicit `None` rather than a missing global.
//! [`RequestTracker`] records which network operations are in flight; the
//! loading overlay is derived from it.

use crate::config::ClientConfig;
use crate::download::DownloadFile;
use crate::error::{Artifact, ClientError};
use crate::model::portfolio::PortfolioInput;
use crate::model::resume::ResumeSnapshot;
use crate::render::portfolio::render_portfolio;
use crate::render::Interpolation;

#[derive(Debug, Default)]
pub struct Session {
    resume: Option<ResumeSnapshot>,
    portfolio: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached résumé with the latest successful generation.
    pub fn store_resume(&mut self, snapshot: ResumeSnapshot) {
        self.resume = Some(snapshot);
    }

    pub fn resume(&self) -> Option<&ResumeSnapshot> {
        self.resume.as_ref()
    }

    /// Payload for `POST /api/download-pdf`, if a résumé has been generated.
    pub fn pdf_request(&self) -> Result<&ResumeSnapshot, ClientError> {
        self.resume
            .as_ref()
            .ok_or(ClientError::NothingGenerated(Artifact::Resume))
    }

    /// Validates the form, renders the portfolio and caches it.
    ///
    /// The cache is only touched once rendering succeeded: a validation or
    /// parse failure leaves the previous portfolio in place.
    pub fn generate_portfolio(
        &mut self,
        input: &PortfolioInput,
        interpolation: Interpolation,
    ) -> Result<&str, ClientError> {
        let projects = input.parse_projects()?;
        let document = render_portfolio(
            &input.name,
            &input.bio,
            &input.skills,
            &projects,
            interpolation,
        );
        Ok(self.portfolio.insert(document).as_str())
    }

    pub fn portfolio(&self) -> Option<&str> {
        self.portfolio.as_deref()
    }

    pub fn portfolio_file(&self, config: &ClientConfig) -> Result<DownloadFile, ClientError> {
        self.portfolio
            .as_deref()
            .map(|document| DownloadFile::html(&config.portfolio_file_name, document))
            .ok_or(ClientError::NothingGenerated(Artifact::Portfolio))
    }
}

/// Network operations that show the loading overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    GenerateResume,
    GenerateCoverLetter,
    DownloadPdf,
}

/// Tracks in-flight requests, at most one per kind.
#[derive(Debug, Default)]
pub struct RequestTracker {
    resume: bool,
    cover_letter: bool,
    pdf: bool,
}

impl RequestTracker {
    fn slot(&mut self, request: Request) -> &mut bool {
        match request {
            Request::GenerateResume => &mut self.resume,
            Request::GenerateCoverLetter => &mut self.cover_letter,
            Request::DownloadPdf => &mut self.pdf,
        }
    }

    /// Marks `request` as started. Returns `false` when one of the same kind
    /// is still running, in which case the caller must not send another.
    pub fn try_begin(&mut self, request: Request) -> bool {
        let slot = self.slot(request);
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn finish(&mut self, request: Request) {
        *self.slot(request) = false;
    }

    pub fn is_pending(&self, request: Request) -> bool {
        match request {
            Request::GenerateResume => self.resume,
            Request::GenerateCoverLetter => self.cover_letter,
            Request::DownloadPdf => self.pdf,
        }
    }

    /// Whether the loading overlay should be visible.
    pub fn is_busy(&self) -> bool {
        self.resume || self.cover_letter || self.pdf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resume::{PersonalInfo, ResumeDocument};

    fn portfolio_input(projects: &str) -> PortfolioInput {
        PortfolioInput {
            name: "Ada".to_string(),
            bio: "Bio".to_string(),
            skills: "Rust".to_string(),
            projects: projects.to_string(),
        }
    }

    #[test]
    fn test_pdf_request_before_generation_fails() {
        let session = Session::new();
        let err = session.pdf_request().unwrap_err();
        assert_eq!(err.to_string(), "Please generate a resume first");
    }

    #[test]
    fn test_store_resume_overwrites() {
        let mut session = Session::new();
        for name in ["First", "Second"] {
            session.store_resume(ResumeSnapshot {
                resume_data: ResumeDocument::default(),
                personal_info: PersonalInfo {
                    name: name.to_string(),
                    ..PersonalInfo::default()
                },
            });
        }
        assert_eq!(session.pdf_request().unwrap().personal_info.name, "Second");
    }

    #[test]
    fn test_portfolio_download_before_generation_fails() {
        let session = Session::new();
        let err = session.portfolio_file(&ClientConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Please generate a portfolio first");
    }

    #[test]
    fn test_invalid_projects_keep_previous_portfolio() {
        let mut session = Session::new();
        session
            .generate_portfolio(&portfolio_input("[]"), Interpolation::Escaped)
            .unwrap();
        let before = session.portfolio().unwrap().to_string();

        let mut broken = portfolio_input("[{\"title\":");
        broken.name = "Someone Else".to_string();
        assert!(session.generate_portfolio(&broken, Interpolation::Escaped).is_err());
        assert_eq!(session.portfolio(), Some(before.as_str()));
    }

    #[test]
    fn test_invalid_projects_leave_empty_cache_empty() {
        let mut session = Session::new();
        assert!(session
            .generate_portfolio(&portfolio_input("nope"), Interpolation::Escaped)
            .is_err());
        assert!(session.portfolio().is_none());
    }

    #[test]
    fn test_portfolio_file_uses_configured_name() {
        let mut session = Session::new();
        session
            .generate_portfolio(&portfolio_input("[]"), Interpolation::Escaped)
            .unwrap();
        let file = session.portfolio_file(&ClientConfig::default()).unwrap();
        assert_eq!(file.file_name, "portfolio.html");
        assert_eq!(file.contents, session.portfolio().unwrap().as_bytes());
    }

    #[test]
    fn test_tracker_rejects_double_submission() {
        let mut tracker = RequestTracker::default();
        assert!(!tracker.is_busy());
        assert!(tracker.try_begin(Request::GenerateResume));
        assert!(!tracker.try_begin(Request::GenerateResume));
        assert!(tracker.try_begin(Request::DownloadPdf));
        assert!(tracker.is_busy());

        tracker.finish(Request::GenerateResume);
        assert!(!tracker.is_pending(Request::GenerateResume));
        assert!(tracker.is_busy());

        tracker.finish(Request::DownloadPdf);
        assert!(!tracker.is_busy());
    }
}
