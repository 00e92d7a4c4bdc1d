//! Files handed to the user through a save-as interaction.

use crate::api::{HTML_MIME, PDF_MIME, TEXT_MIME};
use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: Vec<u8>,
}

impl DownloadFile {
    pub fn pdf(file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime: PDF_MIME,
            contents: bytes,
        }
    }

    pub fn html(file_name: &str, document: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime: HTML_MIME,
            contents: document.as_bytes().to_vec(),
        }
    }

    pub fn text(file_name: &str, text: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime: TEXT_MIME,
            contents: text.as_bytes().to_vec(),
        }
    }
}

/// The "trigger file save" capability.
///
/// Implementations must release whatever they acquire to perform the save
/// (object URLs, temporary elements, file handles) on every exit path,
/// including failures.
pub trait FileSaver {
    fn save(&self, file: &DownloadFile) -> Result<(), ClientError>;
}
