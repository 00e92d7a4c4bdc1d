use yew::html::Scope;
use yew::prelude::*;

use super::super::helpers::{display, text_area, text_input, FormField};
use super::super::messages::Msg;
use super::super::state::{PortfolioField, ToolkitComponent};

const PROJECTS_PLACEHOLDER: &str = r#"[{"title": "Project", "description": "What it does", "image": "https://...", "tech": ["Rust"], "link": "https://..."}]"#;

/// Scripts in the generated page stay disabled and it gets an opaque origin;
/// popups are allowed so project links can open in a new tab.
const FRAME_SANDBOX: &str = "allow-popups allow-popups-to-escape-sandbox";

pub fn portfolio_panel(component: &ToolkitComponent, link: &Scope<ToolkitComponent>) -> Html {
    let form = &component.portfolio_form;
    let on = |field: PortfolioField| {
        link.callback(move |value: String| Msg::PortfolioField(field, value))
    };
    let document = component.session.portfolio();

    html! {
        <>
            <h2>{ "Portfolio Generator" }</h2>
            <div class="portfolio-form">
                { text_input(FormField { id: "portfolio-name", label: "Your Name", placeholder: "John Doe", required: false }, "text", &form.name, on(PortfolioField::Name)) }
                { text_area(FormField { id: "portfolio-bio", label: "Bio", placeholder: "A short introduction", required: false }, 3, &form.bio, on(PortfolioField::Bio)) }
                { text_input(FormField { id: "portfolio-skills", label: "Skills (comma-separated)", placeholder: "Rust, WebAssembly, SQL", required: false }, "text", &form.skills, on(PortfolioField::Skills)) }
                { text_area(FormField { id: "portfolio-projects", label: "Projects (JSON)", placeholder: PROJECTS_PLACEHOLDER, required: false }, 8, &form.projects, on(PortfolioField::Projects)) }

                <button type="button" class="btn-primary" onclick={link.callback(|_: MouseEvent| Msg::GeneratePortfolio)}>
                    { "Generate Portfolio" }
                </button>
            </div>

            <div
                id="portfolio-preview"
                class="preview-section"
                ref={component.portfolio_preview_ref.clone()}
                style={display(document.is_some())}
            >
                <div class="preview-header">
                    <h3>{ "Portfolio Preview" }</h3>
                    <button class="btn-secondary" onclick={link.callback(|_: MouseEvent| Msg::DownloadPortfolio)}>
                        { "Download HTML" }
                    </button>
                </div>
                <iframe
                    id="portfolio-frame"
                    title="Portfolio preview"
                    sandbox={FRAME_SANDBOX}
                    srcdoc={document.unwrap_or_default().to_string()}
                />
            </div>
        </>
    }
}
