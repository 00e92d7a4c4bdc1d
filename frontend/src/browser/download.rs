//! Transient-anchor downloads.
//!
//! The bytes are wrapped in a `Blob`, exposed through an object URL, and a
//! hidden `<a download>` is attached to the body and clicked. Both the URL and
//! the anchor are held by guards, so they are released on every exit path:
//! the anchor is detached first, then the URL revoked.

use common::download::{DownloadFile, FileSaver};
use common::error::ClientError;
use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement};

use super::{document, js_error};

/// Saves files through the browser's download manager.
pub struct AnchorSaver;

impl FileSaver for AnchorSaver {
    fn save(&self, file: &DownloadFile) -> Result<(), ClientError> {
        let document = document()?;
        let body = document
            .body()
            .ok_or_else(|| ClientError::Browser("document has no body".to_string()))?;

        let blob = Blob::new_with_options(file.contents.as_slice(), Some(file.mime));
        let url = ObjectUrl::from(blob);

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| ClientError::Browser("could not create a link element".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(&file.file_name);

        let anchor = AttachedAnchor::attach(body, anchor)?;
        anchor.click();
        Ok(())
    }
}

/// An anchor appended to the body for the duration of one download.
struct AttachedAnchor {
    body: HtmlElement,
    anchor: HtmlAnchorElement,
}

impl AttachedAnchor {
    fn attach(body: HtmlElement, anchor: HtmlAnchorElement) -> Result<Self, ClientError> {
        body.append_child(&anchor).map_err(js_error)?;
        Ok(Self { body, anchor })
    }

    fn click(&self) {
        self.anchor.click();
    }
}

impl Drop for AttachedAnchor {
    fn drop(&mut self) {
        let _ = self.body.remove_child(&self.anchor);
    }
}
