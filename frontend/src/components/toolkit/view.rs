//! View rendering for the toolkit component.
//!
//! The page is a header, a tab bar with one button per `Panel`, the four
//! panels (only the active one is displayed) and a full-screen loading
//! overlay shown while any request is in flight.

use common::tabs::Panel;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::panels;
use super::state::ToolkitComponent;

pub fn view(component: &ToolkitComponent, ctx: &Context<ToolkitComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="container">
            <header>
                <h1>{ "AI Resume & Portfolio Builder" }</h1>
                <p class="subtitle">{ "Your professional career toolkit" }</p>
            </header>

            { build_tab_bar(component, link) }

            { for Panel::ALL.into_iter().map(|panel| build_panel(component, link, panel)) }

            { build_loading_overlay(component) }
        </div>
    }
}

/// Each button names its own panel and passes itself as the trigger.
fn build_tab_bar(component: &ToolkitComponent, link: &Scope<ToolkitComponent>) -> Html {
    html! {
        <nav class="tabs">
            {
                for Panel::ALL.into_iter().map(|panel| {
                    let active = component.tabs.is_button_active(panel);
                    html! {
                        <button
                            class={classes!("tab-button", active.then_some("active"))}
                            onclick={link.callback(move |_: MouseEvent| Msg::ShowTab {
                                tab_id: panel.id().to_string(),
                                trigger: panel,
                            })}
                        >
                            { panel.label() }
                        </button>
                    }
                })
            }
        </nav>
    }
}

fn build_panel(component: &ToolkitComponent, link: &Scope<ToolkitComponent>, panel: Panel) -> Html {
    let active = component.tabs.is_panel_active(panel);
    let content = match panel {
        Panel::Resume => panels::resume::resume_panel(component, link),
        Panel::CoverLetter => panels::cover_letter::cover_letter_panel(component, link),
        Panel::Portfolio => panels::portfolio::portfolio_panel(component, link),
        Panel::About => panels::about::about_panel(),
    };

    html! {
        <section
            id={panel.element_id()}
            class={classes!("tab-content", active.then_some("active"))}
            hidden={!active}
        >
            { content }
        </section>
    }
}

fn build_loading_overlay(component: &ToolkitComponent) -> Html {
    let style = if component.requests.is_busy() {
        "display: flex;"
    } else {
        "display: none;"
    };

    html! {
        <div id="loading-overlay" class="loading-overlay" {style}>
            <div class="spinner"></div>
            <p>{ "Generating with AI..." }</p>
        </div>
    }
}
