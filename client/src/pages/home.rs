//! Home route: subject onboarding or the personalized feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preferences are read from browser storage once the page mounts; SSR and
//! the first hydrated frame render the loading state. Completing onboarding
//! saves the new record and switches to the feed without a reload.

use leptos::prelude::*;

use crate::components::subject_selection::SubjectSelection;
use crate::state::preferences::{HomeView, UserPreferences, resolve_home_view};
use crate::state::subjects::SubjectPreference;
use crate::util::preference_store::PreferenceStore;

/// Home page: onboarding until subjects are chosen, then the feed.
#[component]
pub fn HomePage() -> impl IntoView {
    let preferences = RwSignal::new(None::<UserPreferences>);
    let loading = RwSignal::new(true);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        preferences.set(PreferenceStore::browser().load());
        loading.set(false);
    });

    let on_complete = Callback::new(move |subjects: Vec<SubjectPreference>| {
        let next = UserPreferences::onboarded(subjects);
        PreferenceStore::browser().save(&next);
        preferences.set(Some(next));
    });

    // Only the in-memory record is dropped; storage keeps the old choice
    // until the user completes selection again.
    let on_change_subjects = move |_| preferences.set(None);

    view! {
        {move || match preferences.with(|p| resolve_home_view(loading.get(), p.as_ref())) {
            HomeView::Loading => {
                view! {
                    <div class="home-page home-page--loading">
                        <p class="muted">"Loading..."</p>
                    </div>
                }
                    .into_any()
            }
            HomeView::Onboarding { initial } => {
                view! {
                    <div class="home-page">
                        <main class="container">
                            <SubjectSelection on_complete=on_complete initial_preferences=initial/>
                        </main>
                    </div>
                }
                    .into_any()
            }
            HomeView::Feed { interests } => {
                view! {
                    <div class="home-page">
                        <main class="container">
                            <header class="home-page__header">
                                <div>
                                    <h1>"SciFeed"</h1>
                                    <p class="muted">"Your personalized research paper feed"</p>
                                </div>
                                <button class="btn btn--outline" on:click=on_change_subjects>
                                    "Change Subjects"
                                </button>
                            </header>

                            <section class="home-page__interests">
                                <p class="muted">"Your interests:"</p>
                                <div class="interest-tags">
                                    {interests
                                        .into_iter()
                                        .map(|subject| view! { <span class="interest-tag">{subject}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </section>

                            <div class="feed-placeholder">
                                <p class="muted">"Paper feed coming soon!"</p>
                                <p class="muted small">
                                    "We'll display the latest research papers based on your selected subjects"
                                </p>
                            </div>
                        </main>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
