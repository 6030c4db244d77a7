//! Styled multi-line input that grows with its content.

#[cfg(test)]
#[path = "textarea_test.rs"]
mod textarea_test;

use leptos::prelude::*;

use crate::util::class_names::cn;

const BASE_CLASS: &str = "textarea";

/// Controlled `<textarea>` bound to `value`.
///
/// Height is recomputed on mount, on every `input` event, and whenever `value`
/// changes programmatically (e.g. cleared after send).
#[component]
pub fn Textarea(
    value: RwSignal<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    /// Caller handle to the underlying element.
    #[prop(optional)]
    node_ref: NodeRef<leptos::html::Textarea>,
    /// Runs after `value` has been updated from the input event.
    #[prop(optional)]
    on_input: Option<Callback<leptos::ev::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<leptos::ev::KeyboardEvent>>,
) -> impl IntoView {
    let resize = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = node_ref.get_untracked() {
                crate::util::autosize::adjust_height(&el);
            }
        }
    };

    Effect::new(move || {
        value.track();
        resize();
    });

    let on_input = move |ev: leptos::ev::Event| {
        value.set(event_target_value(&ev));
        resize();
        if let Some(cb) = on_input {
            cb.run(ev);
        }
    };

    view! {
        <textarea
            class=cn([BASE_CLASS, class.as_str()])
            id=id
            name=name
            placeholder=placeholder
            rows=rows.map(|r| r.to_string())
            node_ref=node_ref
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:input=on_input
            on:keydown=move |ev| {
                if let Some(cb) = on_keydown {
                    cb.run(ev);
                }
            }
        >
            {value.get_untracked()}
        </textarea>
    }
}
