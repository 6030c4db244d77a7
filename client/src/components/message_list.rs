//! Chat transcript for the tennis assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders one of four panels (error, suggestions, loading skeletons, or the
//! transcript) as decided by `MessageListView::resolve`. The list never
//! interprets errors; it hands them to `ApiErrorDisplay` unchanged.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::components::api_error_display::ApiErrorDisplay;
use crate::state::chat::{ChatError, ChatMessage, MessageListView, SKELETON_ROWS, SUGGESTED_PROMPTS};
use crate::util::time_format::format_message_time;

/// Conversation transcript with empty, loading, and error states.
#[component]
pub fn MessageList(
    #[prop(into)] messages: Signal<Vec<ChatMessage>>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into, default = Signal::stored(None))] error: Signal<Option<ChatError>>,
    /// Invoked with the prompt text when a suggestion is clicked.
    #[prop(optional)]
    on_suggestion: Option<Callback<String>>,
) -> impl IntoView {
    let panel = Memo::new(move |_| {
        MessageListView::resolve(messages.with(Vec::len), is_loading.get(), error.with(Option::is_some))
    });

    move || match panel.get() {
        MessageListView::Error => view! {
            <div class="message-list message-list--centered">
                {error.get().map(|err| view! { <ApiErrorDisplay error=err class="message-list__error"/> })}
            </div>
        }
        .into_any(),
        MessageListView::Suggestions => suggestions(on_suggestion).into_any(),
        MessageListView::Skeletons => skeletons().into_any(),
        MessageListView::Messages { typing } => view! {
            <div class="message-list">
                <For each=move || messages.get() key=|msg| msg.id.clone() let:msg>
                    {message_row(msg)}
                </For>
                {typing.then(typing_indicator)}
            </div>
        }
        .into_any(),
    }
}

fn suggestions(on_suggestion: Option<Callback<String>>) -> impl IntoView {
    view! {
        <div class="message-list message-list--centered message-list__empty">
            <h3 class="message-list__empty-title">"Tennis AI Assistant"</h3>
            <p class="message-list__empty-text">"Ask me anything about tennis techniques, strategies, or training."</p>
            <div class="message-list__suggestions">
                {SUGGESTED_PROMPTS
                    .into_iter()
                    .map(|prompt| {
                        view! {
                            <button
                                type="button"
                                class="message-list__suggestion"
                                on:click=move |_| {
                                    if let Some(cb) = on_suggestion {
                                        cb.run(prompt.to_owned());
                                    }
                                }
                            >
                                {format!("\"{prompt}\"")}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn skeletons() -> impl IntoView {
    view! {
        <div class="message-list">
            {(0..SKELETON_ROWS)
                .map(|_| {
                    view! {
                        <div class="message-list__row message-list__row--start">
                            <div class="message-list__group">
                                <div class="skeleton skeleton--avatar"></div>
                                <div class="skeleton skeleton--bubble"></div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

fn message_row(msg: ChatMessage) -> impl IntoView {
    let is_ai = msg.is_from_ai;
    let row_class = format!("message-list__row message-list__row--{}", msg.alignment().modifier());
    let time = format_message_time(&msg.created_at);

    view! {
        <div class=row_class>
            <div class="message-list__group" class:message-list__group--reverse=!is_ai>
                {is_ai.then(assistant_avatar)}
                <div class="message-list__body">
                    <div
                        class="message-list__bubble"
                        class:message-list__bubble--assistant=is_ai
                        class:message-list__bubble--user=!is_ai
                    >
                        <div class="message-list__content">{msg.content}</div>
                    </div>
                    <time class="message-list__time" datetime=msg.created_at>{time}</time>
                </div>
            </div>
        </div>
    }
}

fn assistant_avatar() -> impl IntoView {
    view! {
        <div class="avatar message-list__avatar" aria-label="AI">
            <span class="avatar__fallback">"AI"</span>
        </div>
    }
}

fn typing_indicator() -> impl IntoView {
    view! {
        <div class="message-list__row message-list__row--start message-list__typing" aria-live="polite">
            <div class="message-list__group">
                {assistant_avatar()}
                <div class="message-list__bubble message-list__bubble--assistant">
                    <div class="typing-dots">
                        <span class="typing-dots__dot"></span>
                        <span class="typing-dots__dot" style="animation-delay: 0.2s"></span>
                        <span class="typing-dots__dot" style="animation-delay: 0.4s"></span>
                    </div>
                </div>
            </div>
        </div>
    }
}
