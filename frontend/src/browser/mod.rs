//! Thin wrappers over browser APIs used by the toolkit component.
//!
//! Everything that touches `window`, the clipboard or the DOM outside Yew's
//! virtual tree lives here, so the component code only deals with
//! `ClientError`s.

use common::error::ClientError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

pub mod clipboard;
pub mod download;
pub mod notify;
pub mod scroll;

fn window() -> Result<Window, ClientError> {
    web_sys::window().ok_or_else(|| ClientError::Browser("window is not available".to_string()))
}

fn document() -> Result<Document, ClientError> {
    window()?
        .document()
        .ok_or_else(|| ClientError::Browser("document is not available".to_string()))
}

/// Best-effort human readable text for a rejected promise or thrown value.
fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn js_error(value: JsValue) -> ClientError {
    ClientError::Browser(describe(&value))
}
