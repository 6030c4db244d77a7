//! Error panel for failed assistant requests.

#[cfg(test)]
#[path = "api_error_display_test.rs"]
mod api_error_display_test;

use leptos::prelude::*;

use crate::state::chat::ChatError;
use crate::util::class_names::cn;

/// Headline for an error category. The message itself is shown verbatim.
pub(crate) fn error_title(kind: Option<&str>) -> &'static str {
    match kind {
        Some("network") => "Connection problem",
        Some("rate_limit") => "Too many requests",
        Some("timeout") => "Request timed out",
        _ => "Something went wrong",
    }
}

/// Shows a caller-supplied error with an optional retry action.
#[component]
pub fn ApiErrorDisplay(error: ChatError, #[prop(optional, into)] class: String) -> impl IntoView {
    let title = error_title(error.kind.as_deref());
    let retry = error.retry;

    view! {
        <div class=cn(["api-error", class.as_str()]) role="alert">
            <h3 class="api-error__title">{title}</h3>
            <p class="api-error__message">{error.message}</p>
            {retry
                .map(|retry| {
                    view! {
                        <button type="button" class="btn btn--outline api-error__retry" on:click=move |_| retry.run(())>
                            "Try again"
                        </button>
                    }
                })}
        </div>
    }
}
