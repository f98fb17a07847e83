//! Error Banner Component
//!
//! Shows the last failed API call above the board; the board itself keeps
//! showing the last good state.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_clear_error, use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    view! {
        {move || store.error().get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-message">{message}</span>
                <button class="error-retry" on:click=move |_| ctx.reload()>"Retry"</button>
                <button class="error-dismiss" title="Dismiss" on:click=move |_| store_clear_error(&store)>"×"</button>
            </div>
        })}
    }
}
