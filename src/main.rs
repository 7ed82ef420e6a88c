mod app;
mod components;
mod config;
mod context;
mod hooks;
mod models;
mod services;
mod utils;
mod views;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Rawda admin panel starting ({})", config::environment());

    yew::Renderer::<App>::new().render();
}
