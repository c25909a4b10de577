//! Screening service client

mod download;
mod screening;

pub use download::download_archive;
pub use screening::submit_batch;

use mars_common::Error;
use wasm_bindgen::JsValue;

pub(crate) fn js_error(context: &str, value: JsValue) -> Error {
    Error::Transport(format!("{context}: {value:?}"))
}
