//! Section List Component
//!
//! Renders every section card in order with drag-to-reorder support.

use leptos::prelude::*;

use crate::components::SectionCard;
use crate::context::use_app_context;

use leptos_dragdrop::*;

/// Ordered list of section cards
#[component]
pub fn SectionList() -> impl IntoView {
    let ctx = use_app_context();

    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |outcome: DragOutcome| {
        if outcome.is_noop() {
            return;
        }
        ctx.update(|c| {
            c.apply_drag(outcome.source, outcome.destination);
        });
    });

    let sections = move || ctx.with(|c| c.section_names());

    view! {
        <div class="section-list">
            <For
                each=sections
                key=|name| name.clone()
                children=move |name| {
                    // Keyed by name; the position is derived
                    let index = entry_index(move || ctx.with(|c| c.section_names()), name.clone());
                    let on_mousedown = make_on_mousedown(dnd, index);
                    let on_mouseenter = make_on_entry_mouseenter(dnd, index);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    let is_dragging = move || dnd.dragging_read.get() == Some(index.get());
                    let is_drop_target = move || {
                        let here = index.get();
                        dnd.dragging_read.get().is_some_and(|src| src != here)
                            && dnd.drop_target_read.get() == Some(here)
                    };

                    let wrapper_class = move || {
                        let mut c = String::from("section-wrapper");
                        if is_dragging() { c.push_str(" dragging"); }
                        if is_drop_target() { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=wrapper_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <SectionCard name=name />
                        </div>
                    }
                }
            />
        </div>
    }
}
