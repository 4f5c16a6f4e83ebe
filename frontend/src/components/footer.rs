//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"SafeLens • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-note">
                "Files are sent only to the configured analysis service and are not stored by this page."
            </div>
        </footer>
    }
}
