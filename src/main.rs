//! Task Board Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(config::log_level()) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    tracing::info!("task board starting");
    mount_to_body(App);
}
