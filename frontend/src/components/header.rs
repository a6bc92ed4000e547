use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <div class="brand">
                <span class="brand-icon"><i class="fa-solid fa-flask"></i></span>
                <span class="brand-name">{"NeuroScan"}</span>
            </div>
            <nav>
                <a href="#analyze" class="nav-link">{"Brain Tumor Detection"}</a>
            </nav>
        </header>
    }
}
