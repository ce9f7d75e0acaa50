//! Form Draft Store
//!
//! Uses Leptos reactive_stores for the text the user is still typing.

use leptos::prelude::*;
use reactive_stores::Store;

/// In-progress input for the section forms
#[derive(Clone, Debug, Default, Store)]
pub struct DraftState {
    /// "Add New Section" name
    pub new_section: String,
    /// Custom section name
    pub custom_name: String,
    /// Custom section items, one per line
    pub custom_items: String,
}

/// Type alias for the store
pub type DraftStore = Store<DraftState>;

/// Get the draft store from context
pub fn use_draft_store() -> DraftStore {
    expect_context::<DraftStore>()
}

/// Reset both custom section fields after a submit
pub fn store_clear_custom(store: &DraftStore) {
    store.custom_name().set(String::new());
    store.custom_items().set(String::new());
}

/// Split textarea input into item names, one per line, skipping blank lines
pub fn parse_item_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
