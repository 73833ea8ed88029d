//! Grocery List Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod logger;
mod long_press;
mod store;
mod suggest;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    mount_to_body(|| view! { <App /> });
}
