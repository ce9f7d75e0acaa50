//! New Section Form Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_draft_store, DraftStateStoreFields};

/// "Add New Section" card
#[component]
pub fn NewSectionForm() -> impl IntoView {
    let ctx = use_app_context();
    let drafts = use_draft_store();

    let add_section = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = drafts.new_section().get();
        if name.is_empty() { return; }
        ctx.update(|c| c.add_section(&name));
        drafts.new_section().set(String::new());
    };

    view! {
        <div class="card form-card">
            <h2>"Add New Section"</h2>
            <form class="section-form" on:submit=add_section>
                <input
                    type="text"
                    placeholder="Section name"
                    prop:value=move || drafts.new_section().get()
                    on:input=move |ev| drafts.new_section().set(event_target_value(&ev))
                />
                <button type="submit">"Add Section"</button>
            </form>
        </div>
    }
}
