#![allow(warnings)]
//! Room Checklist Frontend Entry Point

mod models;
mod error;
mod config;
mod storage;
mod checklist;
mod logging;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
