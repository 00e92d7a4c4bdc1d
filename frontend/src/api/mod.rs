//! HTTP calls to the generation backend.
//!
//! Generation replies are read as text and decoded by the `common` envelopes
//! whatever the status code, because the backend reports logical failures as
//! `{ "success": false, "error": ... }` bodies on 500 responses too.

use common::api::{DOWNLOAD_PDF, GENERATE_COVER_LETTER, GENERATE_RESUME};
use common::config::ClientConfig;
use common::error::ClientError;
use common::model::cover_letter::CoverLetterRequest;
use common::model::resume::{ResumeRequest, ResumeSnapshot};
use common::requests::{CoverLetterReply, GenerateResumeReply};
use gloo_net::http::{Request, Response};
use serde::Serialize;

pub async fn generate_resume(
    config: &ClientConfig,
    request: &ResumeRequest,
) -> Result<ResumeSnapshot, ClientError> {
    let response = post_json(&config.url(GENERATE_RESUME), request).await?;
    let body = response.text().await.map_err(transport)?;
    GenerateResumeReply::from_json(&body)?.into_result()
}

pub async fn generate_cover_letter(
    config: &ClientConfig,
    request: &CoverLetterRequest,
) -> Result<String, ClientError> {
    let response = post_json(&config.url(GENERATE_COVER_LETTER), request).await?;
    let body = response.text().await.map_err(transport)?;
    CoverLetterReply::from_json(&body)?.into_result()
}

/// Asks the backend to render `snapshot` and returns the PDF bytes.
pub async fn download_pdf(
    config: &ClientConfig,
    snapshot: &ResumeSnapshot,
) -> Result<Vec<u8>, ClientError> {
    let response = post_json(&config.url(DOWNLOAD_PDF), snapshot).await?;
    if !response.ok() {
        return Err(ClientError::DownloadStatus(response.status()));
    }
    response.binary().await.map_err(transport)
}

async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<Response, ClientError> {
    Request::post(url)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)
}

/// JS failures report only their message, as `fetch` rejections read in the page.
fn transport(err: gloo_net::Error) -> ClientError {
    match err {
        gloo_net::Error::JsError(js) => ClientError::Transport(js.message),
        other => ClientError::Transport(other.to_string()),
    }
}
