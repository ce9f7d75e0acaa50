//! Custom Section Form Component
//!
//! Creates a section pre-filled with items typed one per line.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{parse_item_lines, store_clear_custom, use_draft_store, DraftStateStoreFields};

#[component]
pub fn CustomSectionForm() -> impl IntoView {
    let ctx = use_app_context();
    let drafts = use_draft_store();

    let add_custom = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = drafts.custom_name().get();
        if name.is_empty() { return; }
        let items = parse_item_lines(&drafts.custom_items().get());
        ctx.update(|c| c.add_custom_section(&name, items));
        store_clear_custom(&drafts);
    };

    view! {
        <div class="card form-card">
            <h2>"Custom Section"</h2>
            <form class="section-form custom" on:submit=add_custom>
                <input
                    type="text"
                    placeholder="Custom section name"
                    prop:value=move || drafts.custom_name().get()
                    on:input=move |ev| drafts.custom_name().set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Items, one per line"
                    prop:value=move || drafts.custom_items().get()
                    on:input=move |ev| drafts.custom_items().set(event_target_value(&ev))
                />
                <button type="submit">"Add Custom Section"</button>
            </form>
        </div>
    }
}
