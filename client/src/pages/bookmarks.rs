//! Saved papers page. Bookmarks are not stored yet, so this is static.

use leptos::prelude::*;

#[component]
pub fn BookmarksPage() -> impl IntoView {
    view! {
        <div class="bookmarks-page">
            <main class="container">
                <h1>"Saved Papers"</h1>
                <p class="muted">"Your bookmarked research papers"</p>
            </main>
        </div>
    }
}
