//! Backend routes called by the web client.
//!
//! The backend itself is an external collaborator; these are the paths and
//! body shapes it is known to answer. Bodies are JSON (see [`crate::requests`]).

/// Generates résumé content from a `ResumeRequest`.
pub const GENERATE_RESUME: &str = "/api/generate-resume";

/// Generates a cover letter from a `CoverLetterRequest`.
pub const GENERATE_COVER_LETTER: &str = "/api/generate-cover-letter";

/// Renders a cached `ResumeSnapshot` into PDF bytes.
pub const DOWNLOAD_PDF: &str = "/api/download-pdf";

pub const PDF_MIME: &str = "application/pdf";
pub const HTML_MIME: &str = "text/html";
pub const TEXT_MIME: &str = "text/plain";
