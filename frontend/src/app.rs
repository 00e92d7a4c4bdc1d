use crate::components::toolkit::ToolkitComponent;
use common::config::ClientConfig;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <ToolkitComponent config={ClientConfig::default()} />
            </div>
        }
    }
}
