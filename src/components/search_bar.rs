//! Search Bar Component

use leptos::prelude::*;

use crate::store::{store_set_search, use_app_store, AppStateStoreFields};

/// Search box filtering tasks by title or description
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    let term = move || store.tasks().read().search_term().to_string();
    let has_term = move || !store.tasks().read().search_term().is_empty();

    view! {
        <div class="search-bar">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                placeholder="Search tasks by title or description..."
                prop:value=term
                on:input=move |ev| store_set_search(&store, event_target_value(&ev))
            />
            <Show when=has_term>
                <button
                    class="search-clear"
                    title="Clear search"
                    on:click=move |_| store_set_search(&store, String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
