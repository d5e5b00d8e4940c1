//! Courtside Web Frontend
//!
//! Leptos-based WASM frontend for the early-access landing page.

mod api;
mod app;
mod components;
mod dialogs;
mod pages;
mod storage;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
