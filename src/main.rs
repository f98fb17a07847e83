//! Kanban Board Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod dnd;
mod error;
mod form;
mod logging;
mod models;
mod pagination;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
