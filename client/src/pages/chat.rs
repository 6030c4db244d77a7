//! Assistant chat page: transcript, attachment preview, and composer.
//!
//! There is no assistant backend behind this page. In the browser a canned
//! coaching reply arrives after a short delay, and an offline browser produces
//! a retryable network error instead.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

use crate::components::media_preview::MessageMediaPreview;
use crate::components::message_list::MessageList;
use crate::components::textarea::Textarea;
use crate::state::chat::ChatState;
#[cfg(feature = "hydrate")]
use crate::state::chat::{ChatError, ChatMessage};
use crate::state::media::PendingAttachment;

#[cfg(feature = "hydrate")]
const REPLY_DELAY_MS: u32 = 900;
#[cfg(feature = "hydrate")]
const UPLOAD_TICK_MS: u32 = 150;
#[cfg(feature = "hydrate")]
const UPLOAD_STEP_PERCENT: f64 = 12.5;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());
    let attachment = RwSignal::new(None::<PendingAttachment>);

    let send = move |text: String| {
        if attachment.with_untracked(|a| a.as_ref().is_some_and(|a| a.uploading)) {
            return;
        }
        let mut sent = None;
        chat.update(|c| sent = c.submit(&text));
        if let Some(message) = sent {
            input.set(String::new());
            attachment.set(None);
            request_reply(chat, message.content);
        }
    };

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send(input.get_untracked());
        }
    });
    let on_suggestion = Callback::new(move |prompt: String| send(prompt));
    let on_remove = Callback::new(move |()| attachment.set(None));

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input_el) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input_el.files().and_then(|files| files.get(0)) else {
                return;
            };
            match web_sys::Url::create_object_url_with_blob(&file) {
                Ok(url) => {
                    let media_type = crate::state::media::media_type_for_mime(&file.type_());
                    attachment.set(Some(PendingAttachment::start(url, media_type)));
                    simulate_upload(attachment);
                }
                Err(e) => leptos::logging::warn!("could not preview attachment: {e:?}"),
            }
            input_el.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    // Progress ticks must not re-create the preview, only a new file may.
    let staged = Memo::new(move |_| {
        attachment.with(|a| a.as_ref().map(|a| (a.url.clone(), a.media_type.clone())))
    });

    let can_send = move || {
        !input.with(|t| t.trim().is_empty())
            && !chat.with(|c| c.loading)
            && !attachment.with(|a| a.as_ref().is_some_and(|a| a.uploading))
    };

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"Rally"</h1>
                <a class="chat-page__link" href="/profile">"Edit profile"</a>
            </header>

            <div class="chat-page__messages">
                <MessageList
                    messages=Signal::derive(move || chat.with(|c| c.messages.clone()))
                    is_loading=Signal::derive(move || chat.with(|c| c.loading))
                    error=Signal::derive(move || chat.with(|c| c.error.clone()))
                    on_suggestion=on_suggestion
                />
            </div>

            <div class="chat-page__composer">
                {move || {
                    staged
                        .get()
                        .map(|(url, media_type)| {
                            view! {
                                <MessageMediaPreview
                                    url=url
                                    media_type=media_type
                                    class="chat-page__attachment"
                                    upload_progress=Signal::derive(move || {
                                        attachment.with(|a| a.as_ref().map_or(100.0, |a| a.progress))
                                    })
                                    is_uploading=Signal::derive(move || {
                                        attachment.with(|a| a.as_ref().is_some_and(|a| a.uploading))
                                    })
                                    on_remove=on_remove
                                />
                            }
                        })
                }}
                <div class="chat-page__input-row">
                    <label class="btn btn--outline chat-page__attach">
                        "Attach"
                        <input type="file" accept="image/*,video/*" class="sr-only" on:change=on_file_change/>
                    </label>
                    <Textarea
                        value=input
                        class="chat-page__input"
                        placeholder="Ask about technique, strategy, or training..."
                        rows=1
                        disabled=Signal::derive(move || chat.with(|c| c.loading))
                        on_keydown=on_keydown
                    />
                    <button
                        class="btn btn--primary chat-page__send"
                        disabled=move || !can_send()
                        on:click=move |_| send(input.get_untracked())
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Canned coaching reply for the demo assistant.
pub(crate) fn coach_reply(prompt: &str) -> String {
    let lower = prompt.to_lowercase();
    let tip = if lower.contains("serve") {
        "Work on a consistent toss first: same height, slightly in front of your hitting shoulder."
    } else if lower.contains("backhand") {
        "Turn your shoulders early and let the racquet finish high over your front shoulder."
    } else if lower.contains("clay") {
        "Build points patiently on clay. Use heavy topspin and practice sliding into wide balls."
    } else if lower.contains("routine") || lower.contains("training") || lower.contains("exercise") {
        "Mix two on-court drill sessions with one footwork and one strength session each week."
    } else {
        "Tell me a bit more about your level and what you want to improve, and I'll suggest drills."
    };
    tip.to_owned()
}

/// Wait for the demo assistant, then append its reply (or a network error).
fn request_reply(chat: RwSignal<ChatState>, prompt: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(REPLY_DELAY_MS).await;
            let online = web_sys::window().is_none_or(|w| w.navigator().on_line());
            if online {
                chat.update(|c| c.receive(ChatMessage::now(coach_reply(&prompt), true)));
            } else {
                let retry = Callback::new(move |()| {
                    let mut prompt = None;
                    chat.update(|c| prompt = c.resume());
                    if let Some(prompt) = prompt {
                        request_reply(chat, prompt);
                    }
                });
                chat.update(|c| {
                    c.fail(
                        ChatError::new("Unable to reach the assistant. Check your connection and try again.")
                            .with_kind("network")
                            .with_retry(retry),
                    );
                });
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, prompt);
    }
}

/// Drive the staged attachment's progress until it completes or is removed.
#[cfg(feature = "hydrate")]
fn simulate_upload(attachment: RwSignal<Option<PendingAttachment>>) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(UPLOAD_TICK_MS).await;
            let mut more = false;
            attachment.update(|a| {
                if let Some(pending) = a.as_mut() {
                    more = pending.advance(UPLOAD_STEP_PERCENT);
                }
            });
            if !more {
                break;
            }
        }
    });
}
