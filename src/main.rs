#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    let config = app_lib::config::AppConfig::load();
    if let Err(err) = app_lib::telemetry::init(&config.log_level) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    tracing::info!(commit = app_lib::build_info::git_commit_hash(), "starting web client");
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
