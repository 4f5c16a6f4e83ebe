//! Image/video mode switch.
//!
//! Two mutually exclusive controls. Switching resets the previews and the
//! result region and invalidates any in-flight analysis.

use leptos::*;
use safelens_core::{Mode, UploadSession};
use web_sys::AbortController;

use crate::services::revoke_preview_url;

/// CSS classes for the control of `control`, given the active mode.
pub fn toggle_class(control: Mode, active: Mode) -> String {
    let base = match control {
        Mode::Image => "toggle_image",
        Mode::Video => "toggle_video",
    };
    if control == active {
        format!("{} {}_active", base, base)
    } else {
        base.to_string()
    }
}

#[component]
pub fn ModeToggle(
    session: RwSignal<UploadSession>,
    in_flight: StoredValue<Option<AbortController>>,
) -> impl IntoView {
    let switch_to = move |mode: Mode| {
        let mut released = None;
        session.update(|s| released = s.toggle(mode));

        if let Some(url) = released {
            revoke_preview_url(&url);
        }
        in_flight.update_value(|slot| {
            if let Some(controller) = slot.take() {
                controller.abort();
            }
        });
    };

    let active = move || session.with(|s| s.mode());

    view! {
        <div class="mode-toggle">
            <button
                class=move || toggle_class(Mode::Image, active())
                on:click=move |_| switch_to(Mode::Image)
            >
                {format!("🖼️ {}", Mode::Image.label())}
            </button>
            <button
                class=move || toggle_class(Mode::Video, active())
                on:click=move |_| switch_to(Mode::Video)
            >
                {format!("🎬 {}", Mode::Video.label())}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_control_active() {
        for active in [Mode::Image, Mode::Video] {
            let image = toggle_class(Mode::Image, active);
            let video = toggle_class(Mode::Video, active);
            assert_ne!(image.ends_with("_active"), video.ends_with("_active"));
        }
        assert_eq!(toggle_class(Mode::Video, Mode::Video), "toggle_video toggle_video_active");
        assert_eq!(toggle_class(Mode::Image, Mode::Video), "toggle_image");
    }
}
