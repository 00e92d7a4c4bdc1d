//! Update function for the toolkit component.
//!
//! Elm-style: each `Msg` mutates the component and returns whether the view
//! must re-render. Network calls are spawned on the local executor and report
//! back with a completion message (`ResumeGenerated`, `PdfDownloaded`, ...),
//! which is where the request is marked finished, so the loading overlay is
//! hidden on success, logical failure and transport failure alike.

use common::download::{DownloadFile, FileSaver};
use common::error::{Artifact, ClientError};
use common::render::Interpolation;
use common::session::Request;
use gloo_console::{log, warn};
use web_sys::HtmlElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::browser::clipboard;
use crate::browser::download::AnchorSaver;
use crate::browser::notify::{notify, notify_error};

use super::messages::Msg;
use super::state::{Preview, ToolkitComponent};

/// Portfolio content is typed by the user but still escaped: the preview frame
/// must only ever show text the user can read back.
pub const PORTFOLIO_INTERPOLATION: Interpolation = Interpolation::Escaped;

pub fn update(component: &mut ToolkitComponent, ctx: &Context<ToolkitComponent>, msg: Msg) -> bool {
    match msg {
        Msg::ShowTab { tab_id, trigger } => {
            component.tabs.show_tab(&tab_id, trigger);
            true
        }

        Msg::ResumeField(field, value) => {
            field.apply(&mut component.resume_form, value);
            false
        }
        Msg::SubmitResume => {
            if !component.requests.try_begin(Request::GenerateResume) {
                warn!("resume generation already in flight, ignoring submit");
                return false;
            }
            log!("generating resume");

            let config = component.config.clone();
            let request = component.resume_form.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::generate_resume(&config, &request).await;
                link.send_message(Msg::ResumeGenerated(result));
            });
            true
        }
        Msg::ResumeGenerated(result) => {
            component.requests.finish(Request::GenerateResume);
            match result {
                Ok(snapshot) => {
                    component.session.store_resume(snapshot);
                    component.pending_scroll = Some(Preview::Resume);
                }
                Err(err) => notify_error(&err),
            }
            true
        }
        Msg::DownloadPdf => {
            let snapshot = match component.session.pdf_request() {
                Ok(snapshot) => snapshot.clone(),
                Err(err) => {
                    notify_error(&err);
                    return false;
                }
            };
            if !component.requests.try_begin(Request::DownloadPdf) {
                warn!("pdf download already in flight");
                return false;
            }

            let config = component.config.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::download_pdf(&config, &snapshot).await;
                link.send_message(Msg::PdfDownloaded(result));
            });
            true
        }
        Msg::PdfDownloaded(result) => {
            component.requests.finish(Request::DownloadPdf);
            let file_name = &component.config.resume_file_name;
            let saved = result.and_then(|bytes| AnchorSaver.save(&DownloadFile::pdf(file_name, bytes)));
            if let Err(err) = saved {
                notify_error(&err);
            }
            true
        }

        Msg::CoverLetterField(field, value) => {
            field.apply(&mut component.cover_letter_form, value);
            false
        }
        Msg::SubmitCoverLetter => {
            if !component.requests.try_begin(Request::GenerateCoverLetter) {
                warn!("cover letter generation already in flight, ignoring submit");
                return false;
            }
            log!("generating cover letter");

            let config = component.config.clone();
            let request = component.cover_letter_form.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::generate_cover_letter(&config, &request).await;
                link.send_message(Msg::CoverLetterGenerated(result));
            });
            true
        }
        Msg::CoverLetterGenerated(result) => {
            component.requests.finish(Request::GenerateCoverLetter);
            match result {
                Ok(text) => {
                    component.cover_letter = Some(text);
                    component.pending_scroll = Some(Preview::CoverLetter);
                }
                Err(err) => notify_error(&err),
            }
            true
        }
        Msg::CopyCoverLetter => {
            let text = rendered_cover_letter(component).unwrap_or_default();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = clipboard::write_text(&text).await;
                link.send_message(Msg::CoverLetterCopied(result));
            });
            false
        }
        Msg::CoverLetterCopied(result) => {
            match result {
                Ok(()) => notify("Cover letter copied to clipboard!"),
                Err(err) => notify_error(&err),
            }
            false
        }
        Msg::DownloadCoverLetter => {
            let saved = component
                .cover_letter
                .as_ref()
                .and_then(|_| rendered_cover_letter(component))
                .ok_or(ClientError::NothingGenerated(Artifact::CoverLetter))
                .and_then(|text| {
                    AnchorSaver.save(&DownloadFile::text(
                        &component.config.cover_letter_file_name,
                        &text,
                    ))
                });
            if let Err(err) = saved {
                notify_error(&err);
            }
            false
        }

        Msg::PortfolioField(field, value) => {
            field.apply(&mut component.portfolio_form, value);
            false
        }
        Msg::GeneratePortfolio => {
            match component
                .session
                .generate_portfolio(&component.portfolio_form, PORTFOLIO_INTERPOLATION)
            {
                Ok(document) => {
                    log!(format!("portfolio generated ({} bytes)", document.len()));
                    component.pending_scroll = Some(Preview::Portfolio);
                    true
                }
                Err(err) => {
                    notify_error(&err);
                    false
                }
            }
        }
        Msg::DownloadPortfolio => {
            let saved = component
                .session
                .portfolio_file(&component.config)
                .and_then(|file| AnchorSaver.save(&file));
            if let Err(err) = saved {
                notify_error(&err);
            }
            false
        }
    }
}

/// Text content of the rendered cover letter, as the user sees it.
fn rendered_cover_letter(component: &ToolkitComponent) -> Option<String> {
    component
        .cover_letter_content_ref
        .cast::<HtmlElement>()
        .and_then(|element| element.text_content())
}
