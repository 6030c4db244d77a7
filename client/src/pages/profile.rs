//! Player profile wizard page.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::textarea::Textarea;
use crate::components::wizard_navigation::WizardNavigation;
use crate::state::profile::ProfileWizardState;

#[cfg(feature = "hydrate")]
const SAVE_DELAY_MS: u32 = 1200;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let wizard = expect_context::<RwSignal<ProfileWizardState>>();
    let notes = PROFILE_NOTE_PROMPTS.map(|_| RwSignal::new(String::new()));

    let on_previous = Callback::new(move |()| wizard.update(ProfileWizardState::previous));
    let on_next = Callback::new(move |()| wizard.update(ProfileWizardState::next));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        wizard.update(|w| started = w.begin_save());
        if started {
            leptos::logging::log!("saving profile");
            finish_save(wizard);
        }
    };

    let step = move || wizard.with(|w| w.step);
    let step_notes = move || notes.get(step()).copied();

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <h1>"Player profile"</h1>
                <a class="profile-page__link" href="/">"Back to chat"</a>
            </header>

            <form class="profile-page__form" on:submit=on_submit>
                <span class="profile-page__progress">{move || wizard.with(|w| w.nav().progress_label())}</span>
                <h2 class="profile-page__step-title">{move || wizard.with(|w| w.title())}</h2>
                <p class="profile-page__step-prompt">
                    {move || PROFILE_NOTE_PROMPTS.get(step()).copied().unwrap_or_default()}
                </p>
                {move || {
                    step_notes()
                        .map(|value| {
                            view! {
                                <Textarea value=value class="profile-page__notes" name="notes"/>
                            }
                        })
                }}
                <Show when=move || wizard.with(|w| w.saved && !w.saving)>
                    <p class="profile-page__saved" role="status">"Profile saved."</p>
                </Show>

                <WizardNavigation
                    current_step=Signal::derive(step)
                    total_steps=Signal::derive(move || wizard.with(ProfileWizardState::total_steps))
                    is_last_step=Signal::derive(move || wizard.with(ProfileWizardState::is_last_step))
                    is_saving=Signal::derive(move || wizard.with(|w| w.saving))
                    is_new_user=Signal::derive(move || wizard.with(|w| w.new_user))
                    on_previous=on_previous
                    on_next=on_next
                />
            </form>
        </div>
    }
}

/// Guidance shown above each step's notes box, indexed like the steps.
const PROFILE_NOTE_PROMPTS: [&str; 4] = [
    "How long have you been playing, and what is your rating?",
    "Describe your game: baseliner, all-court, serve and volley?",
    "What do you want to improve over the next few months?",
    "Anything else your coach should know?",
];

fn finish_save(wizard: RwSignal<ProfileWizardState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SAVE_DELAY_MS).await;
            wizard.update(ProfileWizardState::finish_save);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        wizard.update(ProfileWizardState::finish_save);
    }
}
