use js_sys::Date;
use yew::prelude::*;

const PRODUCT_LINKS: [&str; 3] = ["Features", "Technology", "Accuracy"];
const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Disclaimer"];

pub fn render_footer() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="app-footer">
            <div class="footer-columns">
                <div class="footer-brand">
                    <div class="brand">
                        <span class="brand-icon"><i class="fa-solid fa-flask"></i></span>
                        <span class="brand-name">{"NeuroScan"}</span>
                    </div>
                    <p>
                        {"Advanced AI-powered tool for assisting medical professionals in the early detection and classification of brain tumors from MRI scans."}
                    </p>
                </div>
                { render_link_column("Product", &PRODUCT_LINKS) }
                { render_link_column("Legal", &LEGAL_LINKS) }
            </div>
            <div class="footer-bottom">
                <p>{ format!("© {} NeuroScan AI. All rights reserved.", year) }</p>
                <p>{"*Not a replacement for professional medical advice."}</p>
            </div>
        </footer>
    }
}

fn render_link_column(title: &str, links: &[&'static str]) -> Html {
    html! {
        <div class="footer-links">
            <h4>{ title.to_string() }</h4>
            <ul>
                { for links.iter().map(|link| html! { <li key={*link}><a href="#">{ *link }</a></li> }) }
            </ul>
        </div>
    }
}
