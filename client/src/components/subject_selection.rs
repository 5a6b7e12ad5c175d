//! Onboarding screen for choosing research subjects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the home page until the user has confirmed at least one
//! subject. Holds a `SelectionState` signal and hands the finished
//! preference list to `on_complete`; persisting it is the caller's job.

use leptos::prelude::*;

use crate::components::subject_card::SubjectCard;
use crate::state::selection::{SelectionState, selection_summary, subject_cards};
use crate::state::subjects::SubjectPreference;

/// Subject grid with a live selection count and a Continue button.
#[component]
pub fn SubjectSelection(
    on_complete: Callback<Vec<SubjectPreference>>,
    #[prop(optional)] initial_preferences: Vec<SubjectPreference>,
) -> impl IntoView {
    let selection = RwSignal::new(SelectionState::new(&initial_preferences));

    let on_toggle = Callback::new(move |id: &'static str| selection.update(|s| s.toggle(id)));

    let on_continue = move |_| {
        if let Some(preferences) = selection.with(SelectionState::complete) {
            on_complete.run(preferences);
        }
    };

    view! {
        <div class="subject-selection">
            <div class="subject-selection__intro">
                <h1>"Welcome to SciFeed"</h1>
                <p>"Select the research areas you're interested in to personalize your feed"</p>
            </div>

            <div class="subject-selection__grid">
                {move || {
                    subject_cards(&selection.get())
                        .into_iter()
                        .map(|card| view! { <SubjectCard card=card on_toggle=on_toggle/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="subject-selection__footer">
                <p class="subject-selection__summary">
                    {move || selection_summary(selection.with(SelectionState::selected_count))}
                </p>
                <button
                    class="btn btn--primary btn--large"
                    disabled=move || !selection.with(SelectionState::can_complete)
                    on:click=on_continue
                >
                    "Continue to Feed"
                </button>
            </div>
        </div>
    }
}
