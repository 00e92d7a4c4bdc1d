use common::render::resume::render_resume;
use common::render::Interpolation;
use common::session::Request;
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use super::super::helpers::{display, text_area, text_input, FormField};
use super::super::messages::Msg;
use super::super::state::{ResumeField, ToolkitComponent};

/// Backend résumé content is injected as markup, so it crosses a trust
/// boundary here. It is escaped: the preview never executes what the
/// generator returns.
const RESUME_INTERPOLATION: Interpolation = Interpolation::Escaped;

pub fn resume_panel(component: &ToolkitComponent, link: &Scope<ToolkitComponent>) -> Html {
    let form = &component.resume_form;
    let on = |field: ResumeField| link.callback(move |value: String| Msg::ResumeField(field, value));
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitResume
    });
    let pending = component.requests.is_pending(Request::GenerateResume);

    html! {
        <>
            <h2>{ "Resume Builder" }</h2>
            <form id="resume-form" {onsubmit}>
                <h3>{ "Personal Information" }</h3>
                { text_input(FormField { id: "name", label: "Full Name*", placeholder: "John Doe", required: true }, "text", &form.name, on(ResumeField::Name)) }
                { text_input(FormField { id: "email", label: "Email*", placeholder: "john@example.com", required: true }, "email", &form.email, on(ResumeField::Email)) }
                { text_input(FormField { id: "phone", label: "Phone*", placeholder: "+1 234 567 8900", required: true }, "tel", &form.phone, on(ResumeField::Phone)) }
                { text_input(FormField { id: "target-role", label: "Target Role*", placeholder: "Software Engineer", required: true }, "text", &form.target_role, on(ResumeField::TargetRole)) }

                <h3>{ "Professional Details" }</h3>
                { text_area(FormField { id: "skills", label: "Skills (comma-separated)*", placeholder: "Python, JavaScript, React, Machine Learning", required: true }, 3, &form.skills, on(ResumeField::Skills)) }
                { text_area(FormField { id: "education", label: "Education*", placeholder: "Bachelor of Technology in Computer Science\nXYZ University, 2024", required: true }, 3, &form.education, on(ResumeField::Education)) }
                { text_area(FormField { id: "experience", label: "Experience", placeholder: "Software Engineering Intern at ABC Corp\nJune 2023 - August 2023", required: false }, 4, &form.experience, on(ResumeField::Experience)) }
                { text_area(FormField { id: "projects", label: "Projects*", placeholder: "1. E-commerce Platform\n2. ML Image Classifier", required: true }, 4, &form.projects, on(ResumeField::Projects)) }

                <button type="submit" class="btn-primary" disabled={pending}>{ "Generate AI Resume" }</button>
            </form>

            { resume_preview(component, link) }
        </>
    }
}

fn resume_preview(component: &ToolkitComponent, link: &Scope<ToolkitComponent>) -> Html {
    let snapshot = component.session.resume();
    let content = snapshot
        .map(|s| render_resume(&s.resume_data, &s.personal_info, RESUME_INTERPOLATION))
        .unwrap_or_default();

    html! {
        <div
            id="resume-preview"
            class="preview-section"
            ref={component.resume_preview_ref.clone()}
            style={display(snapshot.is_some())}
        >
            <div class="preview-header">
                <h3>{ "Your AI-Generated Resume" }</h3>
                <button class="btn-secondary" onclick={link.callback(|_: MouseEvent| Msg::DownloadPdf)}>
                    { "Download PDF" }
                </button>
            </div>
            <div id="resume-content" class="resume-content">
                { Html::from_html_unchecked(AttrValue::from(content)) }
            </div>
        </div>
    }
}
