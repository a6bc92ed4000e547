use gloo_net::http::Request;
use shared::{AnalysisError, FILE_FIELD, Prediction, Ticket, interpret_response};
use wasm_bindgen::JsValue;
use web_sys::{AbortController, AbortSignal, File, FormData};

use crate::config;

/// The in-flight prediction call. Dropping it aborts the request unless it
/// has been marked finished.
pub struct PendingRequest {
    ticket: Ticket,
    controller: Option<AbortController>,
}

impl PendingRequest {
    pub fn new(ticket: Ticket) -> Self {
        let controller = AbortController::new()
            .map_err(|err| log::warn!("AbortController unavailable: {:?}", err))
            .ok();
        Self { ticket, controller }
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub fn finish(mut self) {
        self.controller = None;
    }
}

impl Drop for PendingRequest {
    fn drop(&mut self) {
        if let Some(controller) = self.controller.take() {
            log::debug!("Aborting superseded request {:?}", self.ticket);
            controller.abort();
        }
    }
}

fn js_failure(err: JsValue) -> AnalysisError {
    AnalysisError::Network(format!("{:?}", err))
}

/// Posts `file` to the prediction endpoint as multipart form data.
pub async fn predict_image(file: &File, signal: Option<&AbortSignal>) -> Result<Prediction, AnalysisError> {
    let form_data = FormData::new().map_err(js_failure)?;
    form_data
        .append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(js_failure)?;

    let url = config::predict_url();
    let response = Request::post(&url)
        .abort_signal(signal)
        .body(form_data)
        .map_err(|err| AnalysisError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| {
            log::error!("Request to {} failed: {}", url, err);
            AnalysisError::Network(err.to_string())
        })?;

    let status = response.status();
    let body = response.text().await.unwrap_or_else(|err| {
        log::warn!("Could not read response body (status {}): {}", status, err);
        String::new()
    });

    interpret_response(status, &body)
}
