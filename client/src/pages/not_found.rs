//! Fallback page for unmatched routes.

use leptos::prelude::*;

/// Renders "Page not found." and, during SSR, marks the response 404.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! { <p class="not-found">"Page not found."</p> }
}
