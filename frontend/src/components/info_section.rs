use yew::prelude::*;

const REASONS: [&str; 3] = [
    "Reduces diagnostic time from hours to seconds, allowing faster intervention.",
    "Acts as a second opinion to reduce human error and fatigue-related oversights.",
    "Continuous learning model that improves with more data over time.",
];

const TAGS: [&str; 4] = ["Early Detection", "High Precision", "Secure Processing", "User Friendly"];

pub fn render_info_section() -> Html {
    html! {
        <section class="info-section">
            <div class="info-card">
                <h3>{"Why AI for Diagnosis?"}</h3>
                <ol class="reasons">
                    { for REASONS.iter().enumerate().map(|(index, reason)| html! {
                        <li key={index}>
                            <span class="reason-number">{ (index + 1).to_string() }</span>
                            <p>{ *reason }</p>
                        </li>
                    })}
                </ol>
            </div>
            <div class="info-text">
                <h2>
                    {"Empowering Radiologists with "}
                    <span class="accent">{"Deep Learning"}</span>
                </h2>
                <p>
                    {"Our system utilizes a Convolutional Neural Network (CNN) trained on thousands of MRI scans. \
                      By identifying subtle patterns in tissue density and structure, NeuroScan assists medical \
                      professionals in early identification of Glioma, Meningioma, and Pituitary tumors."}
                </p>
                <ul class="tags">
                    { for TAGS.iter().map(|tag| html! {
                        <li key={*tag}>
                            <i class="fa-solid fa-check"></i>
                            <span>{ *tag }</span>
                        </li>
                    })}
                </ul>
            </div>
        </section>
    }
}
