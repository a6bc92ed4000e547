use thiserror::Error;

/// Everything that can end an upload attempt. `Display` is the text shown
/// to the user; transport detail is kept for logging only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Please upload a valid image (JPG, JPEG, PNG)")]
    UnsupportedType { mime: String },

    #[error("Could not reach the analysis service. Please check your connection and try again.")]
    Network(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Request failed with status {status}")]
    Status { status: u16 },

    #[error("Request failed with status {status}")]
    MalformedResponse { status: u16 },

    #[error("The analysis service returned an invalid confidence value.")]
    InvalidConfidence(f64),
}

impl AnalysisError {
    /// Validation errors never reach the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::UnsupportedType { .. })
    }
}
