//! Task Modal Component
//!
//! Create/edit dialog. Field errors appear on submit and clear as the field is edited.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::form::TaskForm;
use crate::models::Column;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let form_field = move |f: fn(&TaskForm) -> String| {
        store.modal().with(|modal| modal.form().map(f).unwrap_or_default())
    };
    let is_edit = move || store.modal().with(|modal| modal.form().is_some_and(|form| form.is_edit()));
    let title_error = move || store.modal().with(|m| m.form().and_then(|f| f.errors.title.clone()));
    let description_error = move || store.modal().with(|m| m.form().and_then(|f| f.errors.description.clone()));

    let close = move || store.modal().write().close();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        store.modal().write().submit(|submission| {
            let repo = ctx.repository();
            spawn_local(async move {
                let result = actions::submit_task(&repo, &submission).await;
                store_apply(&store, result);
            });
        });
    };

    view! {
        <Show when=move || store.modal().with(|modal| modal.is_open())>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">
                        {move || if is_edit() { "Edit Task" } else { "Create New Task" }}
                    </h2>
                    <form on:submit=on_submit>
                        <label class="form-field">
                            <span>"Title"</span>
                            <input
                                type="text"
                                placeholder="Enter task title"
                                class:invalid=move || title_error().is_some()
                                prop:value=move || form_field(|f| f.title.clone())
                                on:input=move |ev| store.modal().write().set_title(event_target_value(&ev))
                            />
                            {move || title_error().map(|msg| view! { <span class="field-error">{msg}</span> })}
                        </label>

                        <label class="form-field">
                            <span>"Description"</span>
                            <textarea
                                rows="4"
                                placeholder="Enter task description"
                                class:invalid=move || description_error().is_some()
                                prop:value=move || form_field(|f| f.description.clone())
                                on:input=move |ev| store.modal().write().set_description(event_target_value(&ev))
                            ></textarea>
                            {move || description_error().map(|msg| view! { <span class="field-error">{msg}</span> })}
                        </label>

                        <label class="form-field">
                            <span>"Column"</span>
                            <select
                                prop:value=move || form_field(|f| f.column.as_str().to_string())
                                on:change=move |ev| {
                                    if let Ok(column) = event_target_value(&ev).parse::<Column>() {
                                        store.modal().write().set_column(column);
                                    }
                                }
                            >
                                {Column::ALL
                                    .into_iter()
                                    .map(|column| view! { <option value=column.as_str()>{column.title()}</option> })
                                    .collect_view()}
                            </select>
                        </label>

                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn-primary">
                                {move || if is_edit() { "Update" } else { "Create" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
