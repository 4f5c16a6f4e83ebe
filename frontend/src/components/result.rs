//! Result region: mode prompt, verdict or error.

use leptos::*;
use safelens_core::{ResultDisplay, ResultView, UploadSession};

#[component]
pub fn ResultPanel(session: RwSignal<UploadSession>) -> impl IntoView {
    move || match session.with(|s| s.display().clone()) {
        ResultDisplay::Hidden => ().into_view(),
        ResultDisplay::Shown(view) => render_view(view).into_view(),
    }
}

fn render_view(result: ResultView) -> impl IntoView {
    let class = format!("result {}", result.tone.css_class());
    let color = result.tone.css_color();

    let rows = result
        .rows
        .into_iter()
        .map(|row| {
            let value = if row.strong {
                view! { <b class="font-semibold">{row.value}</b> }.into_view()
            } else {
                row.value.into_view()
            };
            view! { <div class="result-row">{row.label} ": " {value}</div> }
        })
        .collect_view();

    view! {
        <div class=class style:color=color>
            {result.heading.map(|heading| view! { <b class="text-lg">{heading}</b> })}
            {rows}
            {result.message}
        </div>
    }
}
