//! Selectable card for one research subject.

use leptos::prelude::*;

use crate::state::selection::SubjectCardView;

/// A subject card. Clicking the card or its checkbox toggles the subject.
#[component]
pub fn SubjectCard(card: SubjectCardView, on_toggle: Callback<&'static str>) -> impl IntoView {
    let id = card.id;
    let selected = card.selected;

    view! {
        <div
            class="subject-card"
            class:subject-card--selected=selected
            role="button"
            on:click=move |_| on_toggle.run(id)
        >
            <div class="subject-card__header">
                <div class="subject-card__text">
                    <h3 class="subject-card__title">
                        {card.name}
                        {selected.then(|| view! { <span class="badge">"Selected"</span> })}
                    </h3>
                    <p class="subject-card__description">{card.description}</p>
                </div>
                <input
                    class="subject-card__checkbox"
                    type="checkbox"
                    prop:checked=selected
                    on:click=move |ev| ev.stop_propagation()
                    on:change=move |_| on_toggle.run(id)
                />
            </div>
            {card
                .preview
                .map(|preview| {
                    let more = preview.more_label();
                    view! {
                        <div class="subject-card__includes">
                            <p class="subject-card__includes-title">"Includes:"</p>
                            <p class="subject-card__includes-list">
                                <span>{preview.label()}</span>
                                {more.map(|label| view! { <span class="subject-card__more">{label}</span> })}
                            </p>
                        </div>
                    }
                })}
        </div>
    }
}
