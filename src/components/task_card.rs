//! Task Card Component
//!
//! A draggable card inside a board column.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_dragdrop::*;

use crate::actions;
use crate::components::DeleteTaskButton;
use crate::context::use_app_context;
use crate::models::{Column, Task};
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

/// A single task card at `index` on its column's current page
#[component]
pub fn TaskCard(
    task: Task,
    index: usize,
    column: Column,
    dnd: DndSignals,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = task.id;
    let slot = DropSlot::new(column.as_str(), index);

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, id, slot.clone());
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
    let is_drop_target = move || {
        dnd.drop_target_read.with(|target| target.as_ref() == Some(&slot))
    };
    let card_class = move || {
        let mut c = String::from("task-card");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let on_delete = Callback::new(move |_| {
        let repo = ctx.repository();
        spawn_local(async move {
            let result = actions::delete_task(&repo, id).await;
            store_apply(&store, result);
        });
    });

    let title = task.title.clone();
    let description = task.description.clone();
    let delete_title = task.title.clone();

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="task-card-header">
                <h3 class="task-title">{title}</h3>
                <div class="task-actions">
                    <button
                        class="edit-btn"
                        title="Edit task"
                        on:click=move |_| {
                            // Ignore the click that ends a drag
                            if !dnd.drag_just_ended_read.get_untracked() {
                                store.modal().write().open_edit(&task);
                            }
                        }
                    >
                        "✎"
                    </button>
                    <DeleteTaskButton title=delete_title on_confirm=on_delete />
                </div>
            </div>
            <p class="task-description">{description}</p>
        </div>
    }
}
