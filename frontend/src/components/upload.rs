//! File picker, previews and submission.
//!
//! Selecting a file previews it on the surface matching the current mode
//! and immediately posts it for analysis; there is no submit button.

use leptos::*;
use safelens_core::{Mode, Selection, UploadSession, ANALYZING_MESSAGE};
use web_sys::{AbortController, Event, HtmlInputElement};

use crate::services::{analyze_file, create_preview_url, revoke_preview_url};
use crate::ANALYZE_URL;

#[component]
pub fn UploadSection(
    session: RwSignal<UploadSession>,
    in_flight: StoredValue<Option<AbortController>>,
) -> impl IntoView {
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        // Picker dismissed: nothing to do
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let selection = Selection {
            file_name: file.name(),
            preview_url: create_preview_url(&file).unwrap_or_default(),
        };

        let mut submission = None;
        session.update(|s| submission = s.select(Some(selection)));
        let Some(submission) = submission else {
            return;
        };

        if let Some(url) = &submission.superseded_url {
            revoke_preview_url(url);
        }

        // Abort whatever the previous selection still has in flight
        let controller = AbortController::new().ok();
        in_flight.update_value(|slot| {
            if let Some(previous) = std::mem::replace(slot, controller.clone()) {
                previous.abort();
            }
        });

        log::info!(
            "🔎 Analyzing {} as {} (request #{})",
            file.name(),
            submission.mode,
            submission.generation
        );

        spawn_local(async move {
            let outcome = analyze_file(file, ANALYZE_URL, controller).await;

            let mut applied = false;
            session.update(|s| applied = s.complete(submission.generation, outcome));
            if applied {
                in_flight.update_value(|slot| *slot = None);
            }
        });
    };

    let preview_src = move |mode: Mode| {
        session.with(|s| {
            s.preview()
                .filter(|p| p.mode == mode && !p.url.is_empty())
                .map(|p| p.url.clone())
        })
    };
    let display_for = move |visible: bool| if visible { "block" } else { "none" };

    view! {
        <div class="upload-section" id="uploadZone">
            <div class="preview">
                <img
                    class="up_image"
                    alt="Selected image"
                    src=move || preview_src(Mode::Image)
                    style:display=move || display_for(session.with(|s| s.image_visible()))
                />
                <video
                    class="up_video"
                    controls=true
                    src=move || preview_src(Mode::Video)
                    style:display=move || display_for(session.with(|s| s.video_visible()))
                ></video>

                <Show
                    when=move || session.with(|s| s.is_analyzing())
                    fallback=|| view! { }
                >
                    <div class="result text-black-500 text-center">{ANALYZING_MESSAGE}</div>
                </Show>
            </div>

            <input
                type="file"
                id="upload"
                accept=move || session.with(|s| s.accept())
                style="display:none"
                on:change=on_file_change
            />

            <label for="upload" class="upload-button">
                {move || match session.with(|s| s.mode()) {
                    Mode::Image => "Choose an image",
                    Mode::Video => "Choose a video",
                }}
            </label>
        </div>
    }
}
