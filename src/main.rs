//! CRM Frontend Entry Point

// The API client covers every backend endpoint; a few (get-by-id, the
// complete shortcut) have no caller in the current views.
#![allow(dead_code)]

mod api;
mod app;
mod components;
mod context;
mod format;
mod metrics;
mod models;
mod pipeline;
mod seq;
mod store;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
