//! Previous / Next / Save controls for multi-step forms.

#[cfg(test)]
#[path = "wizard_navigation_test.rs"]
mod wizard_navigation_test;

use leptos::prelude::*;

use crate::state::wizard::{PrimaryAction, WizardNavState};

/// Navigation bar at the bottom of a wizard.
///
/// The save button is `type="submit"`; the host form's submit handler owns
/// the save itself and reports progress back through `is_saving`.
#[component]
pub fn WizardNavigation(
    #[prop(into)] current_step: Signal<usize>,
    #[prop(into)] total_steps: Signal<usize>,
    #[prop(into)] is_last_step: Signal<bool>,
    #[prop(into)] is_saving: Signal<bool>,
    #[prop(into)] is_new_user: Signal<bool>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let nav = Memo::new(move |_| WizardNavState {
        current_step: current_step.get(),
        total_steps: total_steps.get(),
        is_last_step: is_last_step.get(),
        is_saving: is_saving.get(),
        is_new_user: is_new_user.get(),
    });

    view! {
        <div class="wizard-nav">
            <button
                type="button"
                class="btn btn--outline btn--lg wizard-nav__previous"
                disabled=move || nav.get().previous_disabled()
                on:click=move |_| on_previous.run(())
            >
                <span class="wizard-nav__icon" aria-hidden="true">"←"</span>
                " Previous"
            </button>

            {move || match nav.get().primary_action() {
                PrimaryAction::Next => view! {
                    <button type="button" class="btn btn--primary btn--lg wizard-nav__next" on:click=move |_| on_next.run(())>
                        "Next "
                        <span class="wizard-nav__icon" aria-hidden="true">"→"</span>
                    </button>
                }
                .into_any(),
                PrimaryAction::Save { label, busy } => view! {
                    <button type="submit" class="btn btn--primary btn--lg wizard-nav__save" disabled=busy aria-busy=busy.to_string()>
                        {if busy {
                            view! { <span class="spinner wizard-nav__icon" aria-hidden="true"></span> }.into_any()
                        } else {
                            view! { <span class="wizard-nav__icon" aria-hidden="true">"✓"</span> }.into_any()
                        }}
                        {label}
                    </button>
                }
                .into_any(),
            }}
        </div>
    }
}
