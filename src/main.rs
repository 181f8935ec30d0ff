//! Academix Items Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod models;
mod notify;
mod store;

use app::App;
use leptos::prelude::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new().set_max_level(level).build(),
    );

    mount_to_body(App);
}
