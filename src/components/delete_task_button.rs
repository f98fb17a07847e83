//! Delete Task Button
//!
//! Inline two-step delete on a task card: the first click asks, the second deletes.

use leptos::prelude::*;

/// Longest title quoted in the confirmation prompt
const PROMPT_TITLE_CHARS: usize = 24;

/// `Delete "title"?`, long titles cut with an ellipsis
fn delete_prompt(title: &str) -> String {
    let mut chars = title.chars();
    let head: String = chars.by_ref().take(PROMPT_TITLE_CHARS).collect();
    if chars.next().is_some() {
        format!("Delete \"{}…\"?", head.trim_end())
    } else {
        format!("Delete \"{}\"?", head)
    }
}

#[component]
pub fn DeleteTaskButton(
    #[prop(into)] title: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let prompt = delete_prompt(&title);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    class="delete-btn"
                    title="Delete task"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    "×"
                </button>
            }
        >
            <span class="delete-confirm" on:mouseleave=move |_| set_asking.set(false)>
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Delete"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }
                >
                    "Keep"
                </button>
            </span>
        </Show>
    }
}
