//! Attachment preview for chat messages (image or video).
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the composer while a file uploads and inside sent messages.
//! Load state comes from browser media events; upload progress is pushed in by
//! the caller, which owns the actual upload.

#[cfg(test)]
#[path = "media_preview_test.rs"]
mod media_preview_test;

use leptos::prelude::*;

use crate::state::media::{DEFAULT_UPLOAD_PROGRESS, MediaError, MediaKind, MediaOverlays, MediaViewState};
use crate::util::class_names::cn;

/// Media preview with loading, error/retry, upload progress, and remove overlays.
#[component]
pub fn MessageMediaPreview(
    #[prop(into)] url: Signal<String>,
    /// `"image"` renders an `<img>`; any other type renders a `<video>`.
    #[prop(into)]
    media_type: Signal<String>,
    #[prop(optional, into)] class: String,
    #[prop(into, default = Signal::stored(DEFAULT_UPLOAD_PROGRESS))] upload_progress: Signal<f64>,
    #[prop(into, default = Signal::stored(false))] is_uploading: Signal<bool>,
    #[prop(optional)] on_remove: Option<Callback<()>>,
) -> impl IntoView {
    let state = RwSignal::new(MediaViewState::new(&url.get_untracked()));

    // A new URL starts a fresh load cycle.
    Effect::new(move |prev: Option<String>| {
        let current = url.get();
        if prev.is_some_and(|p| p != current) {
            state.set(MediaViewState::new(&current));
        }
        if current.trim().is_empty() {
            leptos::logging::warn!("media preview received empty URL");
        }
        current
    });

    Effect::new(move || {
        let s = state.get();
        leptos::logging::log!(
            "media preview: url={} type={} uploading={} progress={} loading={} error={:?}",
            url.get_untracked(),
            media_type.get_untracked(),
            is_uploading.get_untracked(),
            upload_progress.get_untracked(),
            s.loading,
            s.error
        );
    });

    let removable = on_remove.is_some();
    let overlays = Memo::new(move |_| {
        MediaOverlays::resolve(&state.get(), is_uploading.get(), upload_progress.get(), removable)
    });
    // Only a retry may re-create the media element; load/error must not.
    let attempt = Memo::new(move |_| state.with(|s| s.attempt));

    let on_load = move || {
        leptos::logging::log!("media loaded: {}", url.get_untracked());
        state.update(MediaViewState::on_load);
    };
    let on_error = move || {
        leptos::logging::warn!("media failed to load: {}", url.get_untracked());
        state.update(MediaViewState::on_error);
    };
    let on_retry = move || state.update(MediaViewState::retry);

    let media = move || {
        let _ = attempt.get();
        let src = url.get();
        if src.trim().is_empty() {
            return ().into_any();
        }
        match MediaKind::from_type(&media_type.get()) {
            MediaKind::Image => view! {
                <img
                    class="media-preview__media"
                    src=src
                    alt="Message attachment"
                    on:load=move |_| on_load()
                    on:error=move |_| on_error()
                />
            }
            .into_any(),
            MediaKind::Video => view! {
                <video
                    class="media-preview__media"
                    src=src
                    controls=true
                    on:loadeddata=move |_| on_load()
                    on:error=move |_| on_error()
                >
                    "Your browser does not support the video tag."
                </video>
            }
            .into_any(),
        }
    };

    view! {
        <div class=cn(["media-preview", class.as_str()])>
            <Show when=move || overlays.get().spinner>
                <div class="media-preview__overlay media-preview__overlay--loading">
                    <span class="spinner" aria-hidden="true"></span>
                </div>
            </Show>

            {move || overlays.get().error.map(|err| error_overlay(err, on_retry))}

            {move || {
                overlays
                    .get()
                    .upload
                    .map(|upload| {
                        view! {
                            <div class="media-preview__overlay media-preview__overlay--upload">
                                <span class="spinner" aria-hidden="true"></span>
                                <progress
                                    class="media-preview__progress"
                                    max="100"
                                    value=upload.progress.to_string()
                                    aria-label="Upload progress"
                                ></progress>
                                <p class="media-preview__progress-text">{upload.caption()}</p>
                            </div>
                        }
                    })
            }}

            {on_remove
                .map(|remove| {
                    view! {
                        <button
                            type="button"
                            class="btn btn--danger btn--icon media-preview__remove"
                            on:click=move |_| remove.run(())
                        >
                            <span aria-hidden="true">"×"</span>
                            <span class="sr-only">"Remove"</span>
                        </button>
                    }
                })}

            {media}
        </div>
    }
}

/// Error message with its retry control.
fn error_overlay(err: MediaError, on_retry: impl Fn() + Copy + 'static) -> impl IntoView {
    view! {
        <div class="media-preview__overlay media-preview__overlay--error" role="alert">
            <div class="media-preview__error">
                <p class="media-preview__error-text">{err.to_string()}</p>
                <button type="button" class="btn btn--outline btn--sm media-preview__retry" on:click=move |_| on_retry()>
                    "Retry"
                </button>
            </div>
        </div>
    }
}
