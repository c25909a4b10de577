//! Upload submission to the screening service

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use super::js_error;
use mars_common::{AnalysisResult, Error};

/// Served by the backend collaborator; the front end knows nothing else
/// about it.
const UPLOAD_URL: &str = "/api/upload";

/// Submits one batch of PDFs plus the topic as a multipart request and
/// decodes the summary the service returns.
///
/// # Arguments
/// * `files` - accepted PDF handles, at least one
/// * `topic` - free-text topic, may be empty
pub async fn submit_batch(files: &[File], topic: &str) -> Result<AnalysisResult, Error> {
    let form = FormData::new().map_err(|e| js_error("form", e))?;
    for file in files {
        form.append_with_blob_and_filename("pdfs", file, &file.name())
            .map_err(|e| js_error("form", e))?;
    }
    form.append_with_str("topic", topic)
        .map_err(|e| js_error("form", e))?;

    // the browser supplies the multipart content type and boundary
    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(form.as_ref()));

    let request =
        Request::new_with_str_and_init(UPLOAD_URL, &opts).map_err(|e| js_error("request", e))?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("upload", e))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| js_error("upload", e))?;

    if !resp.ok() {
        return Err(Error::Transport(format!(
            "upload failed: HTTP {}",
            resp.status()
        )));
    }

    let text = JsFuture::from(resp.text().map_err(|e| js_error("response", e))?)
        .await
        .map_err(|e| js_error("response", e))?
        .as_string()
        .ok_or_else(|| Error::Transport("response body is not text".to_string()))?;

    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = r#"{
            "topic": "X",
            "goodCount": 7,
            "badCount": 3,
            "pdfCount": 10,
            "confidence": 0.85,
            "elapsedMs": 4200
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("decode failed");
        assert_eq!(result.good_count, 7);
        assert_eq!(result.bad_count, 3);
    }

    #[test]
    fn test_decode_failure_is_a_json_error() {
        let error = serde_json::from_str::<AnalysisResult>("not json")
            .map_err(Error::from)
            .unwrap_err();
        assert!(matches!(error, Error::Json(_)));
    }
}
