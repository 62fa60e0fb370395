use crate::app::App;

mod app;
mod components;
#[cfg(test)]
mod test_support;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
