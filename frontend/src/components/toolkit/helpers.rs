//! Form building blocks shared by the panels.
//!
//! Inputs are controlled: each one renders the value held in component state
//! and reports every keystroke through `on_change`.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub struct FormField<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub placeholder: &'a str,
    pub required: bool,
}

pub fn text_input(field: FormField, input_type: &'static str, value: &str, on_change: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        on_change.emit(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    html! {
        <div class="form-group">
            <label for={field.id.to_string()}>{ field.label }</label>
            <input
                type={input_type}
                id={field.id.to_string()}
                placeholder={field.placeholder.to_string()}
                required={field.required}
                value={value.to_string()}
                {oninput}
            />
        </div>
    }
}

pub fn text_area(field: FormField, rows: u32, value: &str, on_change: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        on_change.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });
    html! {
        <div class="form-group">
            <label for={field.id.to_string()}>{ field.label }</label>
            <textarea
                id={field.id.to_string()}
                placeholder={field.placeholder.to_string()}
                required={field.required}
                rows={rows.to_string()}
                value={value.to_string()}
                {oninput}
            />
        </div>
    }
}

/// Inline style that shows or hides a block, as the preview panels toggle.
pub fn display(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}
