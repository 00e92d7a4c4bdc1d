use common::error::ClientError;
use wasm_bindgen_futures::JsFuture;

use super::{describe, window};

/// Writes `text` to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), ClientError> {
    let promise = window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| ClientError::Clipboard(describe(&err)))
}
