//! User notifications.
//!
//! Every outcome is reported through the blocking `window.alert`, and failures
//! are mirrored to the browser console.

use common::error::ClientError;
use gloo_console::{error, log};

pub fn notify(message: &str) {
    log!(format!("notify: {}", message));
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn notify_error(err: &ClientError) {
    error!(format!("{:?} failure: {:?}", err.kind(), err));
    notify(&err.to_string());
}
