use crate::app::App;

mod api;
mod app;
mod browser;
mod components;

fn main() {
    gloo_console::log!("career toolkit starting");
    yew::Renderer::<App>::new().render();
}
