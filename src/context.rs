//! Application Context
//!
//! The checklist store, owned by the root component and shared via Leptos Context API.

use leptos::prelude::*;

use crate::checklist::ChecklistStore;
use crate::storage::BrowserStorage;

pub type Checklist = ChecklistStore<BrowserStorage>;

/// App-wide handle to the checklist
#[derive(Clone, Copy)]
pub struct AppContext {
    checklist: RwSignal<Checklist>,
}

impl AppContext {
    pub fn new(checklist: Checklist) -> Self {
        Self {
            checklist: RwSignal::new(checklist),
        }
    }

    /// Read from the checklist, tracking it in the current reactive scope
    pub fn with<R>(&self, f: impl FnOnce(&Checklist) -> R) -> R {
        self.checklist.with(f)
    }

    /// Mutate the checklist and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut Checklist)) {
        self.checklist.update(f);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
