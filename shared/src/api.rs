use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

pub const PREDICT_PATH: &str = "/predict";

/// Multipart field carrying the uploaded image.
pub const FILE_FIELD: &str = "file";

// Values this far outside 0..=100 are treated as a broken service, not rounding noise.
const CONFIDENCE_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// `message` wins over `error`; blank strings count as missing.
    pub fn into_text(self) -> Option<String> {
        [self.message, self.error]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
    }
}

/// Percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(raw: f64) -> Result<Self, AnalysisError> {
        if !raw.is_finite()
            || raw < -CONFIDENCE_TOLERANCE
            || raw > 100.0 + CONFIDENCE_TOLERANCE
        {
            return Err(AnalysisError::InvalidConfidence(raw));
        }
        // `+ 0.0` folds -0.0 into 0.0
        Ok(Self(raw.clamp(0.0, 100.0) + 0.0))
    }

    pub fn percent(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.2}", self.0);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{trimmed}%")
    }
}

/// A validated prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: Confidence,
}

impl TryFrom<PredictionResponse> for Prediction {
    type Error = AnalysisError;

    fn try_from(response: PredictionResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            confidence: Confidence::new(response.confidence)?,
            label: response.predicted_label,
        })
    }
}

pub fn predict_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH)
}

/// Turns the status and raw body of a `/predict` response into a prediction
/// or the error to show.
pub fn interpret_response(status: u16, body: &str) -> Result<Prediction, AnalysisError> {
    if (200..300).contains(&status) {
        let response: PredictionResponse = serde_json::from_str(body).map_err(|err| {
            log::warn!("Unreadable prediction body (status {status}): {err}");
            AnalysisError::MalformedResponse { status }
        })?;
        return Prediction::try_from(response);
    }

    let text = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_text);

    Err(match text {
        Some(message) => AnalysisError::Server { status, message },
        None => AnalysisError::Status { status },
    })
}
