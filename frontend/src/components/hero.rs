//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"SafeLens - Content Check"</h1>
            <p class="subtitle">
                "Pick an image or a video. "
                "It is sent to the analysis service and classified as safe or not safe for work."
            </p>
        </div>
    }
}
