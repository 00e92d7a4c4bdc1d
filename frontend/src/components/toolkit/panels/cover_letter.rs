use common::session::Request;
use yew::html::Scope;
use yew::prelude::*;

use super::super::helpers::{display, text_area, text_input, FormField};
use super::super::messages::Msg;
use super::super::state::{CoverLetterField, ToolkitComponent};

pub fn cover_letter_panel(component: &ToolkitComponent, link: &Scope<ToolkitComponent>) -> Html {
    let form = &component.cover_letter_form;
    let on = |field: CoverLetterField| {
        link.callback(move |value: String| Msg::CoverLetterField(field, value))
    };
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitCoverLetter
    });
    let pending = component.requests.is_pending(Request::GenerateCoverLetter);

    html! {
        <>
            <h2>{ "Cover Letter Generator" }</h2>
            <form id="cover-letter-form" {onsubmit}>
                { text_input(FormField { id: "cl-name", label: "Full Name*", placeholder: "John Doe", required: true }, "text", &form.name, on(CoverLetterField::Name)) }
                { text_input(FormField { id: "cl-role", label: "Target Role*", placeholder: "Software Engineer", required: true }, "text", &form.target_role, on(CoverLetterField::TargetRole)) }
                { text_input(FormField { id: "company", label: "Company Name*", placeholder: "Google", required: true }, "text", &form.company, on(CoverLetterField::Company)) }
                { text_area(FormField { id: "cl-skills", label: "Your Skills*", placeholder: "Python, Machine Learning, JavaScript", required: true }, 3, &form.skills, on(CoverLetterField::Skills)) }
                { text_area(FormField { id: "cl-experience", label: "Brief Experience*", placeholder: "Describe your relevant experience", required: true }, 4, &form.experience, on(CoverLetterField::Experience)) }

                <button type="submit" class="btn-primary" disabled={pending}>{ "Generate Cover Letter" }</button>
            </form>

            <div
                id="cover-letter-preview"
                class="preview-section"
                ref={component.cover_letter_preview_ref.clone()}
                style={display(component.cover_letter.is_some())}
            >
                <div class="preview-header">
                    <h3>{ "Your Cover Letter" }</h3>
                    <button class="btn-secondary" onclick={link.callback(|_: MouseEvent| Msg::CopyCoverLetter)}>
                        { "Copy to Clipboard" }
                    </button>
                    <button class="btn-secondary" onclick={link.callback(|_: MouseEvent| Msg::DownloadCoverLetter)}>
                        { "Download .txt" }
                    </button>
                </div>
                // A text node: the letter is never parsed as markup.
                <div
                    id="cover-letter-content"
                    class="cover-letter-content"
                    ref={component.cover_letter_content_ref.clone()}
                >
                    { component.cover_letter.clone().unwrap_or_default() }
                </div>
            </div>
        </>
    }
}
