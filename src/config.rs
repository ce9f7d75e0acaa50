//! Checklist Configuration
//!
//! Storage keys and the seed used when nothing has been saved yet.

use crate::models::Sections;

/// Local storage key for the section -> items record
pub const SECTIONS_KEY: &str = "sections";
/// Local storage key for the section -> item -> checked record
pub const CHECKED_ITEMS_KEY: &str = "checkedItems";

/// Sections shown on first launch
const DEFAULT_SECTIONS: &[(&str, &[&str])] = &[
    ("Kitchen", &["Stove", "Sink Faucet", "Fridge Door"]),
    ("LivingRoom", &["Main Door Lock", "Windows Closed"]),
    ("Bedroom", &["Closet Door", "Window Closed", "Nightstand Clear"]),
    ("Office", &["Computer Shut Down", "Lights Off", "Door Locked"]),
    ("Bathroom", &["Faucet Off", "Shower Off", "Toilet Lid Closed"]),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistConfig {
    pub sections_key: String,
    pub checked_key: String,
    pub default_sections: Sections,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            sections_key: SECTIONS_KEY.to_string(),
            checked_key: CHECKED_ITEMS_KEY.to_string(),
            default_sections: default_sections(),
        }
    }
}

impl ChecklistConfig {
    /// Replace the first-launch seed
    pub fn with_default_sections(mut self, sections: Sections) -> Self {
        self.default_sections = sections;
        self
    }
}

pub fn default_sections() -> Sections {
    DEFAULT_SECTIONS
        .iter()
        .map(|(name, items)| (*name, items.iter().copied()))
        .collect()
}
