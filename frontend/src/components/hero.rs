use yew::prelude::*;

const HIGHLIGHTS: [&str; 2] = ["98% Accuracy", "Instant Results"];

pub fn render_hero(on_start: Callback<MouseEvent>, on_learn_more: Callback<MouseEvent>) -> Html {
    html! {
        <section class="hero">
            <div class="hero-text">
                <div class="hero-badge">{"AI-Powered Medical Imaging"}</div>
                <h1>
                    {"Detect Brain Tumors with "}
                    <br />
                    <span class="text-gradient">{"Precise AI Analysis"}</span>
                </h1>
                <p class="hero-lead">
                    {"Leverage state-of-the-art Deep Learning models to analyze MRI scans instantly. Accurate, fast, and secure diagnostic support."}
                </p>
                <div class="hero-actions">
                    <button class="primary-btn" onclick={on_start}>{"Start Diagnosis"}</button>
                    <button class="secondary-btn" onclick={on_learn_more}>{"Learn More"}</button>
                </div>
                <div class="hero-highlights">
                    { for HIGHLIGHTS.iter().map(|highlight| html! {
                        <div class="highlight">
                            <i class="fa-solid fa-check"></i>
                            <span>{ *highlight }</span>
                        </div>
                    })}
                </div>
            </div>
            <div class="hero-visual">
                <i class="fa-solid fa-brain"></i>
            </div>
        </section>
    }
}
