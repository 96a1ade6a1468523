#![allow(warnings)]
//! Pizza Map Frontend Entry Point

mod models;
mod config;
mod api;
mod context;
mod store;
mod map;
mod markdown;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Recent log lines, callable from the browser console
#[wasm_bindgen]
pub fn pizza_map_logs() -> String {
    rolling_logger::render_lines(&rolling_logger::recent_lines())
}

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = rolling_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
    log::info!(
        "Pizza map starting (api: {}, maps key configured: {})",
        config.api_base_url,
        config.maps_api_key.is_some()
    );

    mount_to_body(move || view! { <App config=config /> });
}
