//! Results archive download

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlAnchorElement, Request, RequestInit, Response, Url};

use super::js_error;
use mars_common::Error;

const DOWNLOAD_URL: &str = "/api/download";

/// File name the archive is saved under.
const ARCHIVE_FILE_NAME: &str = "results.zip";

/// Fetches the ZIP of screened PDFs and hands it to the browser as a
/// save-as via a synthetic anchor click.
pub async fn download_archive() -> Result<(), Error> {
    let mut opts = RequestInit::new();
    opts.method("GET");

    let request =
        Request::new_with_str_and_init(DOWNLOAD_URL, &opts).map_err(|e| js_error("request", e))?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("download", e))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| js_error("download", e))?;

    if !resp.ok() {
        return Err(Error::Transport(format!(
            "download failed: HTTP {}",
            resp.status()
        )));
    }

    let blob_value = JsFuture::from(resp.blob().map_err(|e| js_error("blob", e))?)
        .await
        .map_err(|e| js_error("blob", e))?;
    let blob: Blob = blob_value.dyn_into().map_err(|e| js_error("blob", e))?;

    let url = Url::create_object_url_with_blob(&blob).map_err(|e| js_error("object url", e))?;

    let document = window.document().unwrap();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .unwrap()
        .dyn_into()
        .unwrap();
    anchor.set_href(&url);
    anchor.set_download(ARCHIVE_FILE_NAME);
    document.body().unwrap().append_child(&anchor).ok();
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url).map_err(|e| js_error("object url", e))?;

    Ok(())
}
