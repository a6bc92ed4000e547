use super::super::Model;
use super::utils::render_error_message;
use shared::{Outcome, ResultView};
use yew::prelude::*;

pub fn render_outcome(model: &Model) -> Html {
    match model.session.view() {
        Outcome::Nothing => html! {},
        Outcome::Error(message) => render_error_message(&message),
        Outcome::Result(view) => render_result(&view),
    }
}

fn render_result(view: &ResultView) -> Html {
    html! {
        <div class="results-container">
            <div class="result-header">
                <i class="fa-solid fa-circle-check"></i>
                <h2>{"Analysis Complete"}</h2>
            </div>
            <div class="result-grid">
                <div>
                    <p class="result-caption">{"Diagnosis"}</p>
                    <p class="result-label">{ &view.label }</p>
                </div>
                <div>
                    <p class="result-caption">{"Confidence"}</p>
                    <p class="result-value">{ &view.confidence_text }</p>
                </div>
            </div>
            <div class="confidence-meter">
                <div class="meter">
                    <div class="meter-fill" style={view.bar_style.clone()}></div>
                </div>
            </div>
            <p class="disclaimer">
                {"* This is an AI-generated result and should not be used as a medical diagnosis."}
            </p>
        </div>
    }
}
