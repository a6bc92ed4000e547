//! Build-time configuration. Values are baked into the wasm bundle, so set
//! them in the environment of `trunk build`.

const DEFAULT_API_URL: &str = "http://127.0.0.1:5001";

/// Upload limit advertised by the prediction service. Shown, not enforced.
pub const MAX_UPLOAD_HINT: &str = "16MB";

pub fn api_base_url() -> &'static str {
    option_env!("NEUROSCAN_API_URL").unwrap_or(DEFAULT_API_URL)
}

pub fn predict_url() -> String {
    shared::predict_url(api_base_url())
}

pub fn log_level() -> log::Level {
    option_env!("NEUROSCAN_LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::Level::Info)
}
