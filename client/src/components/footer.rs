//! Marketing footer.

use leptos::prelude::*;

const QUICK_LINKS: [(&str, &str); 3] = [
    ("Features", "/#features"),
    ("How It Works", "/#how-it-works"),
    ("Pricing", "/#pricing"),
];

// Legal pages are not published yet.
const LEGAL_LINKS: [(&str, &str); 3] = [
    ("Terms of Service", "#"),
    ("Privacy Policy", "#"),
    ("Refund Policy", "#"),
];

fn link_list(links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <ul class="site-footer__links">
            {links
                .iter()
                .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__brand">
                    <h3>"Imsdly"</h3>
                    <p>"The easiest way to import media files from external storage devices to your computer."</p>
                </div>
                <div class="site-footer__section">
                    <h4>"Quick Links"</h4>
                    {link_list(&QUICK_LINKS)}
                </div>
                <div class="site-footer__section">
                    <h4>"Legal"</h4>
                    {link_list(&LEGAL_LINKS)}
                </div>
            </div>
            <p class="site-footer__copyright">"© 2025 Imsdly. All rights reserved."</p>
        </footer>
    }
}
