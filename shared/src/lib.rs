pub mod api;
pub mod display;
pub mod error;
pub mod mime;
pub mod session;

pub use api::{
    Confidence, ErrorBody, FILE_FIELD, PREDICT_PATH, Prediction, PredictionResponse,
    interpret_response, predict_url,
};
pub use display::{Outcome, ResultView, display_label};
pub use error::AnalysisError;
pub use mime::ImageMime;
pub use session::{AnalysisSession, Phase, Selection, Submission, Ticket};
