//! Room Checklist App
//!
//! Root component: owns the checklist store and lays out the cards.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::checklist::ChecklistStore;
use crate::components::{CustomSectionForm, NewSectionForm, SectionList};
use crate::config::ChecklistConfig;
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::DraftState;

#[component]
pub fn App() -> impl IntoView {
    let checklist = ChecklistStore::initialize(BrowserStorage, ChecklistConfig::default());
    let ctx = AppContext::new(checklist);

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(DraftState::default()));

    let clear_all = move |_| {
        ctx.update(|c| c.clear_all_checks());
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Room Checklist"</h1>
                <button class="clear-all-btn" on:click=clear_all>"Clear All"</button>
            </header>

            <Show when=move || ctx.with(|c| c.is_empty())>
                <p class="empty-hint">"No sections yet. Add one below."</p>
            </Show>
            <SectionList />

            <NewSectionForm />
            <CustomSectionForm />

            <p class="section-count">{move || format!("{} sections", ctx.with(|c| c.len()))}</p>
        </div>
    }
}
