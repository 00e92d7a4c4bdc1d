//! Component state for the career toolkit page.
//!
//! The session caches and the request tracker come from `common`; this module
//! adds the controlled form values, the rendered cover letter and the DOM
//! references the update logic needs for scrolling and copying.

use common::config::ClientConfig;
use common::model::cover_letter::CoverLetterRequest;
use common::model::portfolio::PortfolioInput;
use common::model::resume::ResumeRequest;
use common::session::{RequestTracker, Session};
use common::tabs::TabStrip;
use yew::prelude::*;

/// Preview panels that are scrolled into view once revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Resume,
    CoverLetter,
    Portfolio,
}

pub struct ToolkitComponent {
    pub config: ClientConfig,
    pub tabs: TabStrip,

    /// Latest generated résumé and portfolio, consumed by the downloads.
    pub session: Session,

    /// In-flight network requests; drives the loading overlay.
    pub requests: RequestTracker,

    pub resume_form: ResumeRequest,
    pub cover_letter_form: CoverLetterRequest,
    pub portfolio_form: PortfolioInput,

    /// Text of the last generated cover letter, shown as plain text.
    pub cover_letter: Option<String>,

    /// Preview to scroll to after the next render.
    pub pending_scroll: Option<Preview>,

    pub resume_preview_ref: NodeRef,
    pub cover_letter_preview_ref: NodeRef,
    pub cover_letter_content_ref: NodeRef,
    pub portfolio_preview_ref: NodeRef,
}

impl ToolkitComponent {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            tabs: TabStrip::default(),
            session: Session::new(),
            requests: RequestTracker::default(),
            resume_form: ResumeRequest::default(),
            cover_letter_form: CoverLetterRequest::default(),
            portfolio_form: PortfolioInput::default(),
            cover_letter: None,
            pending_scroll: None,
            resume_preview_ref: NodeRef::default(),
            cover_letter_preview_ref: NodeRef::default(),
            cover_letter_content_ref: NodeRef::default(),
            portfolio_preview_ref: NodeRef::default(),
        }
    }

    pub fn preview_ref(&self, preview: Preview) -> &NodeRef {
        match preview {
            Preview::Resume => &self.resume_preview_ref,
            Preview::CoverLetter => &self.cover_letter_preview_ref,
            Preview::Portfolio => &self.portfolio_preview_ref,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeField {
    Name,
    Email,
    Phone,
    TargetRole,
    Skills,
    Education,
    Experience,
    Projects,
}

impl ResumeField {
    pub fn apply(self, form: &mut ResumeRequest, value: String) {
        let slot = match self {
            ResumeField::Name => &mut form.name,
            ResumeField::Email => &mut form.email,
            ResumeField::Phone => &mut form.phone,
            ResumeField::TargetRole => &mut form.target_role,
            ResumeField::Skills => &mut form.skills,
            ResumeField::Education => &mut form.education,
            ResumeField::Experience => &mut form.experience,
            ResumeField::Projects => &mut form.projects,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverLetterField {
    Name,
    TargetRole,
    Company,
    Skills,
    Experience,
}

impl CoverLetterField {
    pub fn apply(self, form: &mut CoverLetterRequest, value: String) {
        let slot = match self {
            CoverLetterField::Name => &mut form.name,
            CoverLetterField::TargetRole => &mut form.target_role,
            CoverLetterField::Company => &mut form.company,
            CoverLetterField::Skills => &mut form.skills,
            CoverLetterField::Experience => &mut form.experience,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioField {
    Name,
    Bio,
    Skills,
    Projects,
}

impl PortfolioField {
    pub fn apply(self, form: &mut PortfolioInput, value: String) {
        let slot = match self {
            PortfolioField::Name => &mut form.name,
            PortfolioField::Bio => &mut form.bio,
            PortfolioField::Skills => &mut form.skills,
            PortfolioField::Projects => &mut form.projects,
        };
        *slot = value;
    }
}
