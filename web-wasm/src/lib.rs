//! MARS Web App (Leptos + WASM)
//!
//! Browser front end for submitting biomedical PDFs to the screening
//! service and charting the returned classification summary.

mod api;
mod app;
mod components;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
