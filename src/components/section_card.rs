//! Section Card Component
//!
//! One section: title, progress, item rows and an add-item input.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

/// A single section card
#[component]
pub fn SectionCard(name: String) -> impl IntoView {
    let ctx = use_app_context();
    let section = StoredValue::new(name);

    // Per-card draft
    let (new_item, set_new_item) = signal(String::new());

    let items = move || {
        ctx.with(|c| c.items(&section.get_value()).to_vec())
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let all_checked = move || ctx.with(|c| c.all_items_checked(&section.get_value()));
    let progress = move || {
        let (done, total) = ctx.with(|c| c.progress(&section.get_value()));
        format!("{}/{}", done, total)
    };

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_item.get();
        if text.is_empty() { return; }
        ctx.update(|c| {
            if let Err(e) = c.add_item(&section.get_value(), &text) {
                log::warn!("add item failed: {}", e);
            }
        });
        set_new_item.set(String::new());
    };

    view! {
        <div class=move || if all_checked() { "card section-card all-checked" } else { "card section-card" }>
            <div class="section-header">
                <h2 class="section-title">{section.get_value()}</h2>
                <span class="section-progress">{progress}</span>
                <DeleteConfirmButton
                    button_class="delete-btn section-delete-btn"
                    prompt="Delete section?"
                    on_confirm=Callback::new(move |_| {
                        ctx.update(|c| {
                            c.remove_section(&section.get_value());
                        });
                    })
                />
            </div>

            <ul class="item-list">
                <For
                    each=items
                    key=|(index, item)| (*index, item.clone())
                    children=move |(_, item)| {
                        let item = StoredValue::new(item);
                        let checked = move || ctx.with(|c| c.is_checked(&section.get_value(), &item.get_value()));
                        view! {
                            <li class=move || if checked() { "item-row checked" } else { "item-row" }>
                                <label class="item-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=checked
                                        on:change=move |_| {
                                            ctx.update(|c| {
                                                c.toggle_check(&section.get_value(), &item.get_value());
                                            });
                                        }
                                    />
                                    <span class="item-text">{item.get_value()}</span>
                                </label>
                                <button
                                    class="delete-btn"
                                    on:click=move |_| {
                                        ctx.update(|c| {
                                            c.remove_item(&section.get_value(), &item.get_value());
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <form class="add-item-form" on:submit=add_item>
                <input
                    type="text"
                    placeholder="Add item"
                    prop:value=move || new_item.get()
                    on:input=move |ev| set_new_item.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>
        </div>
    }
}
