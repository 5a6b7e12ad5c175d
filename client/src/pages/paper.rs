//! Paper detail page. Echoes the routed paper id until details are fetched.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Paper detail page for `/paper/:id`.
#[component]
pub fn PaperPage() -> impl IntoView {
    let params = use_params_map();
    let paper_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="paper-page">
            <main class="container">
                <h1>"Paper Details"</h1>
                <p class="muted">{move || paper_id_label(&paper_id())}</p>
            </main>
        </div>
    }
}

fn paper_id_label(id: &str) -> String {
    format!("Paper ID: {id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_id_label_echoes_id() {
        assert_eq!(paper_id_label("2401.01234"), "Paper ID: 2401.01234");
    }
}
