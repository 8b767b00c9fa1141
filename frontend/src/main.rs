use crate::app::App;

mod api;
mod app;
mod components;
mod context;
mod host;

fn main() {
    yew::Renderer::<App>::new().render();
}
