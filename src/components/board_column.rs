//! Board Column Component
//!
//! One workflow column: header with count and add button, the current page of
//! cards as a drop container, and a pager when the column spans several pages.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::TaskCard;
use crate::config::TASKS_PER_PAGE;
use crate::models::Column;
use crate::pagination::{column_tasks, paginate, PageCursor};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BoardColumn(column: Column, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    let tasks_in_column = Memo::new(move |_| column_tasks(store.tasks().read().filtered(), column));
    let (cursor, set_cursor) = signal(PageCursor::default());

    // Back to page 1 whenever the search term or this column's size changes
    Effect::new(move |_| {
        let term = store.tasks().read().search_term().to_string();
        let count = tasks_in_column.with(|tasks| tasks.len());
        set_cursor.update(|c| c.observe(&term, count));
    });

    let page = Memo::new(move |_| {
        let current = cursor.with(|c| c.page());
        tasks_in_column.with(|tasks| paginate(tasks, current, TASKS_PER_PAGE))
    });

    let on_body_mousemove = make_on_container_mousemove(
        dnd,
        column.as_str().to_string(),
        move || page.with_untracked(|p| p.tasks.len()),
    );
    let on_body_mouseleave = make_on_mouseleave(dnd);
    let is_drag_over = move || {
        dnd.drop_target_read
            .with(|target| matches!(target, Some(slot) if slot.container == column.as_str()))
    };

    let go_to = move |target: usize| {
        let total = page.with_untracked(|p| p.total_pages);
        set_cursor.update(|c| c.go_to(target, total));
    };

    view! {
        <section class="board-column" style=format!("background-color: {};", column.color())>
            <div class="column-header">
                <div class="column-title-row">
                    <h2 class="column-title">{column.title()}</h2>
                    <span class="column-count">{move || tasks_in_column.with(|tasks| tasks.len())}</span>
                </div>
                <button
                    class="add-task-btn"
                    on:click=move |_| store.modal().write().open_create(column)
                >
                    "+ Add Task"
                </button>
            </div>

            <div
                class=move || if is_drag_over() { "column-body drag-over" } else { "column-body" }
                on:mousemove=on_body_mousemove
                on:mouseleave=on_body_mouseleave
            >
                <For
                    each={move || page.get().tasks.into_iter().enumerate().collect::<Vec<_>>()}
                    key={|(index, task)| {
                        (*index, task.id, task.title.clone(), task.description.clone(), task.column)
                    }}
                    children={move |(index, task)| {
                        view! { <TaskCard task=task index=index column=column dnd=dnd /> }
                    }}
                />

                {move || page.with(|p| p.empty_state()).map(|empty| view! {
                    <div class="column-empty">{empty.message()}</div>
                })}
            </div>

            <Show when=move || page.with(|p| p.has_pager())>
                <div class="column-pager">
                    <div class="pager-buttons">
                        <button
                            class="page-btn"
                            disabled=move || page.with(|p| p.page <= 1)
                            on:click=move |_| go_to(page.with_untracked(|p| p.page.saturating_sub(1)))
                        >
                            "‹"
                        </button>
                        {move || {
                            let (current, total) = page.with(|p| (p.page, p.total_pages));
                            (1..=total)
                                .map(|n| view! {
                                    <button
                                        class=if n == current { "page-btn active" } else { "page-btn" }
                                        on:click=move |_| go_to(n)
                                    >
                                        {n}
                                    </button>
                                })
                                .collect_view()
                        }}
                        <button
                            class="page-btn"
                            disabled=move || page.with(|p| p.page >= p.total_pages)
                            on:click=move |_| go_to(page.with_untracked(|p| p.page + 1))
                        >
                            "›"
                        </button>
                    </div>
                    <span class="pager-caption">{move || page.with(|p| p.caption())}</span>
                </div>
            </Show>
        </section>
    }
}
