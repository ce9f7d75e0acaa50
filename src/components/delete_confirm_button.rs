//! Delete Confirm Button Component
//!
//! Inline two-step delete: × first, then ✓/✗.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `button_class` - CSS class for the initial × button
/// * `prompt` - Text shown next to ✓/✗ (defaults to "Delete?")
/// * `on_confirm` - Runs once the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(optional, into)] prompt: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = prompt.unwrap_or_else(|| "Delete?".to_string());

    let ask = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirming.set(true);
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirming.set(false);
        on_confirm.run(());
    };
    let cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirming.set(false);
    };

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! { <button class=button_class.clone() on:click=ask>"×"</button> }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button class="confirm-btn" on:click=confirm>"✓"</button>
                <button class="cancel-btn" on:click=cancel>"✗"</button>
            </span>
        </Show>
    }
}
