use common::error::ClientError;
use common::model::resume::ResumeSnapshot;
use common::tabs::Panel;

use super::state::{CoverLetterField, PortfolioField, ResumeField};

pub enum Msg {
    /// `trigger` is the tab button the switch came from.
    ShowTab { tab_id: String, trigger: Panel },

    ResumeField(ResumeField, String),
    SubmitResume,
    ResumeGenerated(Result<ResumeSnapshot, ClientError>),
    DownloadPdf,
    PdfDownloaded(Result<Vec<u8>, ClientError>),

    CoverLetterField(CoverLetterField, String),
    SubmitCoverLetter,
    CoverLetterGenerated(Result<String, ClientError>),
    CopyCoverLetter,
    CoverLetterCopied(Result<(), ClientError>),
    DownloadCoverLetter,

    PortfolioField(PortfolioField, String),
    GeneratePortfolio,
    DownloadPortfolio,
}
