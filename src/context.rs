//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpTaskRepository;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the API - write
    set_reload_trigger: WriteSignal<u32>,
    repository: StoredValue<HttpTaskRepository>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        repository: HttpTaskRepository,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            repository: StoredValue::new(repository),
        }
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Repository handle for an async action
    pub fn repository(&self) -> HttpTaskRepository {
        self.repository.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
