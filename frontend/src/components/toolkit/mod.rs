//! Career toolkit page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and the panels.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ToolkitProps`, `ToolkitComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - After a render that revealed a preview, scroll that preview into view.

use yew::prelude::*;

use crate::browser::scroll::scroll_into_view;

mod helpers;
mod messages;
mod panels;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ToolkitProps;
pub use state::ToolkitComponent;

impl Component for ToolkitComponent {
    type Message = Msg;
    type Properties = ToolkitProps;

    fn create(ctx: &Context<Self>) -> Self {
        ToolkitComponent::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // The preview only exists in the DOM once this render has committed.
        if let Some(preview) = self.pending_scroll.take() {
            scroll_into_view(self.preview_ref(preview));
        }
    }
}
