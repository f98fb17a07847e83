//! Kanban Board App
//!
//! Main application component: search, error banner and the four-column board.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::info;

use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

use crate::actions;
use crate::api::HttpTaskRepository;
use crate::components::{BoardColumn, ErrorBanner, SearchBar, TaskModal};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::dnd::DropEvent;
use crate::models::Column;
use crate::store::{store_apply, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let repository = HttpTaskRepository::new(&ApiConfig::from_env());
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), repository);
    provide_context(ctx);

    // Load tasks on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        info!(trigger, "[APP] Loading tasks");
        store.loading().set(true);
        let repo = ctx.repository();
        spawn_local(async move {
            let result = actions::fetch_tasks(&repo).await;
            store.loading().set(false);
            store_apply(&store, result);
        });
    });

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |end| {
        let event = DropEvent::from(end);
        let repo = ctx.repository();
        spawn_local(async move {
            let outcome = actions::drop_task(&repo, &event, |_| store.moving().set(true)).await;
            if let Some(result) = outcome {
                store.moving().set(false);
                store_apply(&store, result);
            }
        });
    });

    view! {
        <div class="board-page">
            <header class="board-header">
                <h1>"Kanban Task Board"</h1>
                <p class="board-subtitle">"Organize your tasks efficiently"</p>
            </header>

            <SearchBar />

            <ErrorBanner />

            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <div class="loading"><div class="spinner"></div></div> }
            >
                <div class="board-columns">
                    {Column::ALL
                        .into_iter()
                        .map(|column| view! { <BoardColumn column=column dnd=dnd /> })
                        .collect_view()}
                </div>
            </Show>

            // Overlay while a drag move is being saved
            <Show when=move || store.moving().get()>
                <div class="moving-overlay"><div class="spinner"></div></div>
            </Show>

            <TaskModal />
        </div>
    }
}
