pub mod app;
pub mod chat;
pub mod config;
pub mod controller;
pub mod conversation;
pub mod shared;
pub mod upload;

use leptos::prelude::*;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

use crate::app::App;
use crate::config::ClientConfig;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let (config, rejected_level) =
        ClientConfig::load().map_err(|e| JsValue::from_str(&e.to_string()))?;

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    if let Some(level) = rejected_level {
        log::warn!("ignoring unknown log level override: {level}");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });

    shared::dom_contract::verify().map_err(|e| {
        log::error!("{}", e);
        JsValue::from_str(&e.to_string())
    })
}
