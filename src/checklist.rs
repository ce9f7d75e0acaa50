//! Checklist Store
//!
//! Single source of truth for sections, items and checked flags.
//! Every mutation writes both records back to storage.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ChecklistConfig;
use crate::error::{ChecklistError, ChecklistResult};
use crate::models::{CheckedState, Section, Sections};
use crate::storage::KeyValueStorage;

pub struct ChecklistStore<S> {
    storage: S,
    config: ChecklistConfig,
    sections: Sections,
    checked: CheckedState,
}

impl<S: KeyValueStorage> ChecklistStore<S> {
    /// Load state from storage, falling back to the configured defaults.
    ///
    /// Missing or malformed records never fail: sections fall back to the
    /// seed, checked flags to empty. The resulting state is written back.
    pub fn initialize(storage: S, config: ChecklistConfig) -> Self {
        let sections = load_record::<Sections>(&storage, &config.sections_key)
            .unwrap_or_else(|| config.default_sections.clone());
        let checked = load_record::<CheckedState>(&storage, &config.checked_key).unwrap_or_default();

        log::info!("loaded {} sections", sections.len());
        let store = Self {
            storage,
            config,
            sections,
            checked,
        };
        store.persist();
        store
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn section_names(&self) -> Vec<String> {
        self.sections.names()
    }

    pub fn checked(&self) -> &CheckedState {
        &self.checked
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Items of a section; empty for an unknown section
    pub fn items(&self, section: &str) -> &[String] {
        self.sections
            .get(section)
            .map(|s| s.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_checked(&self, section: &str, item: &str) -> bool {
        self.checked.is_checked(section, item)
    }

    /// (checked, total) over the items currently in the section
    pub fn progress(&self, section: &str) -> (usize, usize) {
        let items = self.items(section);
        let done = items
            .iter()
            .filter(|item| self.checked.is_checked(section, item))
            .count();
        (done, items.len())
    }

    /// True iff every item in the section is checked.
    /// Vacuously true for an empty section, false for an unknown one.
    pub fn all_items_checked(&self, section: &str) -> bool {
        match self.sections.get(section) {
            Some(s) => s.items.iter().all(|item| self.checked.is_checked(section, item)),
            None => false,
        }
    }

    /// Flip the checked flag for (section, item) and return the new value.
    /// Unknown names just create an orphan entry.
    pub fn toggle_check(&mut self, section: &str, item: &str) -> bool {
        let now = self.checked.toggle(section, item);
        log::debug!("toggled {}/{} -> {}", section, item, now);
        self.persist();
        now
    }

    /// Append an empty section. An existing name keeps its position but
    /// loses its items and checked flags.
    pub fn add_section(&mut self, name: &str) {
        self.add_custom_section(name, Vec::new());
    }

    /// Like `add_section`, seeded with `items`
    pub fn add_custom_section(&mut self, name: &str, items: Vec<String>) {
        if name.is_empty() {
            return;
        }
        if self.sections.upsert(name, items) {
            log::warn!("section {} already existed, its items were replaced", name);
            self.checked.remove_section(name);
        } else {
            log::debug!("added section {}", name);
        }
        self.persist();
    }

    /// Delete a section and its checked flags. Returns false if it was absent.
    pub fn remove_section(&mut self, name: &str) -> bool {
        let removed: Option<Section> = self.sections.remove(name);
        let had_checks = self.checked.remove_section(name);
        if removed.is_none() && !had_checks {
            return false;
        }
        log::debug!("removed section {}", name);
        self.persist();
        removed.is_some()
    }

    /// Append an item to an existing section. Empty names are ignored.
    pub fn add_item(&mut self, section: &str, item: &str) -> ChecklistResult<()> {
        if item.is_empty() {
            return Ok(());
        }
        let target = self
            .sections
            .get_mut(section)
            .ok_or_else(|| ChecklistError::SectionNotFound(section.to_string()))?;
        target.items.push(item.to_string());
        log::debug!("added {} to {}", item, section);
        self.persist();
        Ok(())
    }

    /// Remove every occurrence of `item` from the section, plus its checked flag.
    /// Returns how many entries were removed.
    pub fn remove_item(&mut self, section: &str, item: &str) -> usize {
        let Some(target) = self.sections.get_mut(section) else {
            return 0;
        };
        let before = target.items.len();
        target.items.retain(|i| i != item);
        let removed = before - target.items.len();
        self.checked.remove_item(section, item);
        log::debug!("removed {}x {} from {}", removed, item, section);
        self.persist();
        removed
    }

    pub fn clear_all_checks(&mut self) {
        self.checked.clear();
        log::debug!("cleared all checks");
        self.persist();
    }

    /// Move the section at `from` to position `to`.
    /// Returns true when the order changed.
    pub fn reorder_sections(&mut self, from: usize, to: usize) -> bool {
        if !self.sections.move_entry(from, to) {
            return false;
        }
        log::debug!("moved section {} -> {}", from, to);
        self.persist();
        true
    }

    /// Apply a finished drag; a drag without destination was cancelled.
    pub fn apply_drag(&mut self, source: usize, destination: Option<usize>) -> bool {
        match destination {
            Some(dest) => self.reorder_sections(source, dest),
            None => false,
        }
    }

    /// Write both records to storage
    pub fn save(&self) -> ChecklistResult<()> {
        save_record(&self.storage, &self.config.sections_key, &self.sections)?;
        save_record(&self.storage, &self.config.checked_key, &self.checked)?;
        Ok(())
    }

    /// Best-effort save; memory stays authoritative when storage refuses
    fn persist(&self) {
        if let Err(e) = self.save() {
            log::warn!("failed to persist checklist: {}", e);
        }
    }
}

fn load_record<T: DeserializeOwned>(storage: &impl KeyValueStorage, key: &str) -> Option<T> {
    let raw = match storage.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("could not read {}: {}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed {}: {}", key, e);
            None
        }
    }
}

fn save_record<T: Serialize>(storage: &impl KeyValueStorage, key: &str, value: &T) -> ChecklistResult<()> {
    let json = serde_json::to_string(value)?;
    storage.save(key, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CHECKED_ITEMS_KEY, SECTIONS_KEY};
    use crate::storage::MemoryStorage;

    fn store_with(sections: Sections) -> (ChecklistStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let config = ChecklistConfig::default().with_default_sections(sections);
        (ChecklistStore::initialize(storage.clone(), config), storage)
    }

    fn kitchen() -> (ChecklistStore<MemoryStorage>, MemoryStorage) {
        store_with(Sections::from_iter([("Kitchen", vec!["Stove", "Sink"])]))
    }

    fn letters() -> (ChecklistStore<MemoryStorage>, MemoryStorage) {
        store_with(Sections::from_iter([
            ("A", vec!["a"]),
            ("B", vec!["b"]),
            ("C", vec![]),
            ("D", vec!["d"]),
        ]))
    }

    fn stored_sections(storage: &MemoryStorage) -> Sections {
        serde_json::from_str(&storage.get(SECTIONS_KEY).unwrap()).unwrap()
    }

    fn stored_checked(storage: &MemoryStorage) -> CheckedState {
        serde_json::from_str(&storage.get(CHECKED_ITEMS_KEY).unwrap()).unwrap()
    }

    #[test]
    fn test_initialize_seeds_defaults_when_empty() {
        let storage = MemoryStorage::new();
        let store = ChecklistStore::initialize(storage.clone(), ChecklistConfig::default());

        assert_eq!(store.len(), 5);
        assert_eq!(store.section_names()[0], "Kitchen");
        assert_eq!(store.items("Kitchen"), ["Stove", "Sink Faucet", "Fridge Door"]);
        assert!(store.checked().is_empty());

        // Seed is written back immediately
        assert_eq!(stored_sections(&storage), *store.sections());
        assert_eq!(storage.get(CHECKED_ITEMS_KEY).unwrap(), "{}");
    }

    #[test]
    fn test_initialize_reads_saved_state() {
        let storage = MemoryStorage::new()
            .with_entry(SECTIONS_KEY, r#"{"Garage":["Door"],"Attic":[]}"#)
            .with_entry(CHECKED_ITEMS_KEY, r#"{"Garage":{"Door":true}}"#);
        let store = ChecklistStore::initialize(storage, ChecklistConfig::default());

        assert_eq!(store.section_names(), vec!["Garage", "Attic"]);
        assert!(store.is_checked("Garage", "Door"));
        assert!(store.all_items_checked("Garage"));
    }

    #[test]
    fn test_initialize_falls_back_on_malformed_records() {
        let storage = MemoryStorage::new()
            .with_entry(SECTIONS_KEY, "{not json")
            .with_entry(CHECKED_ITEMS_KEY, r#"{"Kitchen":{"Stove":"yes"}}"#);
        let store = ChecklistStore::initialize(storage.clone(), ChecklistConfig::default());

        assert_eq!(store.len(), 5);
        assert!(store.checked().is_empty());
        // Garbage is overwritten with the recovered state
        assert_eq!(stored_sections(&storage), *store.sections());
    }

    #[test]
    fn test_initialize_keeps_valid_record_when_other_is_malformed() {
        let storage = MemoryStorage::new()
            .with_entry(SECTIONS_KEY, r#"{"Porch":["Light"]}"#)
            .with_entry(CHECKED_ITEMS_KEY, "null");
        let store = ChecklistStore::initialize(storage, ChecklistConfig::default());

        assert_eq!(store.section_names(), vec!["Porch"]);
        assert!(store.checked().is_empty());
    }

    #[test]
    fn test_kitchen_scenario() {
        let (mut store, _) = kitchen();

        store.toggle_check("Kitchen", "Stove");
        assert!(!store.all_items_checked("Kitchen"));
        assert_eq!(store.progress("Kitchen"), (1, 2));

        store.toggle_check("Kitchen", "Sink");
        assert!(store.all_items_checked("Kitchen"));
        assert_eq!(store.progress("Kitchen"), (2, 2));
    }

    #[test]
    fn test_toggle_twice_restores_value() {
        let (mut store, storage) = kitchen();

        assert!(store.toggle_check("Kitchen", "Stove"));
        assert!(!store.toggle_check("Kitchen", "Stove"));
        assert!(!store.is_checked("Kitchen", "Stove"));
        assert!(!stored_checked(&storage).is_checked("Kitchen", "Stove"));
    }

    #[test]
    fn test_toggle_unknown_item_is_harmless_orphan() {
        let (mut store, _) = kitchen();

        assert!(store.toggle_check("Nowhere", "Ghost"));
        assert!(store.is_checked("Nowhere", "Ghost"));
        assert_eq!(store.sections().position("Nowhere"), None);
        assert!(!store.all_items_checked("Nowhere"));
    }

    #[test]
    fn test_add_section_appends_last() {
        let (mut store, storage) = kitchen();

        store.add_section("Garage");
        assert_eq!(store.section_names(), vec!["Kitchen", "Garage"]);
        assert!(store.items("Garage").is_empty());
        assert!(store.all_items_checked("Garage"));
        assert_eq!(stored_sections(&storage).names(), vec!["Kitchen", "Garage"]);
    }

    #[test]
    fn test_add_section_empty_name_is_noop() {
        let (mut store, _) = kitchen();

        store.add_section("");
        store.add_custom_section("", vec!["x".to_string()]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_duplicate_section_resets_items() {
        let (mut store, _) = store_with(Sections::new());

        store.add_section("Garage");
        store.add_item("Garage", "Door").unwrap();
        store.toggle_check("Garage", "Door");
        store.add_section("Workshop");

        store.add_section("Garage");
        assert!(store.items("Garage").is_empty());
        assert_eq!(store.section_names(), vec!["Garage", "Workshop"]);
        assert!(store.checked().section("Garage").is_none());
    }

    #[test]
    fn test_add_custom_section() {
        let (mut store, storage) = kitchen();

        store.add_custom_section("Trip", vec!["Passport".to_string(), "Charger".to_string()]);
        assert_eq!(store.items("Trip"), ["Passport", "Charger"]);
        assert_eq!(store.section_names(), vec!["Kitchen", "Trip"]);

        store.add_custom_section("Kitchen", vec!["Oven".to_string()]);
        assert_eq!(store.items("Kitchen"), ["Oven"]);
        assert_eq!(store.section_names(), vec!["Kitchen", "Trip"]);
        assert_eq!(stored_sections(&storage).get("Kitchen").unwrap().items, vec!["Oven"]);
    }

    #[test]
    fn test_remove_section_cascades() {
        let (mut store, storage) = kitchen();
        store.toggle_check("Kitchen", "Stove");

        assert!(store.remove_section("Kitchen"));
        assert!(!store.section_names().contains(&"Kitchen".to_string()));
        assert!(store.checked().section("Kitchen").is_none());
        assert!(stored_sections(&storage).is_empty());
        assert!(stored_checked(&storage).is_empty());

        assert!(!store.remove_section("Kitchen"));
    }

    #[test]
    fn test_add_item_requires_section() {
        let (mut store, _) = kitchen();

        let err = store.add_item("Garage", "Door").unwrap_err();
        assert!(matches!(err, ChecklistError::SectionNotFound(ref name) if name == "Garage"));
        assert_eq!(store.sections().position("Garage"), None);
    }

    #[test]
    fn test_add_item_empty_name_is_noop() {
        let (mut store, _) = kitchen();

        store.add_item("Kitchen", "").unwrap();
        // Empty name short-circuits before the section lookup
        store.add_item("Missing", "").unwrap();
        assert_eq!(store.items("Kitchen"), ["Stove", "Sink"]);
    }

    #[test]
    fn test_add_and_remove_item_sequence() {
        let (mut store, storage) = kitchen();

        store.add_item("Kitchen", "Oven").unwrap();
        store.add_item("Kitchen", "Stove").unwrap();
        store.add_item("Kitchen", "Kettle").unwrap();
        assert_eq!(store.items("Kitchen"), ["Stove", "Sink", "Oven", "Stove", "Kettle"]);

        // Duplicates are all removed at once
        assert_eq!(store.remove_item("Kitchen", "Stove"), 2);
        assert_eq!(store.items("Kitchen"), ["Sink", "Oven", "Kettle"]);
        assert_eq!(store.remove_item("Kitchen", "Stove"), 0);
        assert_eq!(stored_sections(&storage).get("Kitchen").unwrap().items, vec!["Sink", "Oven", "Kettle"]);
    }

    #[test]
    fn test_remove_item_drops_checked_entry() {
        let (mut store, storage) = kitchen();
        store.toggle_check("Kitchen", "Stove");
        store.toggle_check("Kitchen", "Sink");

        store.remove_item("Kitchen", "Stove");
        assert_eq!(store.checked().section("Kitchen").unwrap().len(), 1);
        assert!(!stored_checked(&storage).is_checked("Kitchen", "Stove"));

        // Re-adding the item starts unchecked
        store.add_item("Kitchen", "Stove").unwrap();
        assert!(!store.is_checked("Kitchen", "Stove"));
        assert!(!store.all_items_checked("Kitchen"));
    }

    #[test]
    fn test_remove_item_from_unknown_section() {
        let (mut store, _) = kitchen();
        assert_eq!(store.remove_item("Garage", "Door"), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_all_checks() {
        let (mut store, storage) = letters();
        store.toggle_check("A", "a");
        store.toggle_check("B", "b");
        assert!(store.all_items_checked("A"));

        store.clear_all_checks();
        for name in ["A", "B", "D"] {
            assert!(!store.all_items_checked(name));
        }
        assert!(store.all_items_checked("C"));
        assert_eq!(store.len(), 4);
        assert!(stored_checked(&storage).is_empty());
    }

    #[test]
    fn test_reorder_sections() {
        let (mut store, storage) = letters();

        assert!(store.reorder_sections(0, 2));
        assert_eq!(store.section_names(), vec!["B", "C", "A", "D"]);
        assert_eq!(store.items("A"), ["a"]);
        assert_eq!(stored_sections(&storage).names(), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_reorder_keeps_checked_state() {
        let (mut store, _) = letters();
        store.toggle_check("D", "d");

        store.reorder_sections(3, 0);
        assert_eq!(store.section_names(), vec!["D", "A", "B", "C"]);
        assert!(store.all_items_checked("D"));
    }

    #[test]
    fn test_cancelled_drag_is_noop() {
        let (mut store, _) = letters();

        assert!(!store.apply_drag(1, None));
        assert!(!store.apply_drag(1, Some(1)));
        assert!(!store.apply_drag(9, Some(0)));
        assert_eq!(store.section_names(), vec!["A", "B", "C", "D"]);

        assert!(store.apply_drag(1, Some(3)));
        assert_eq!(store.section_names(), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_round_trip_through_storage() {
        let (mut store, storage) = letters();
        store.add_custom_section("Trip", vec!["Passport".to_string()]);
        store.toggle_check("Trip", "Passport");
        store.toggle_check("B", "b");
        store.reorder_sections(4, 1);

        let reloaded = ChecklistStore::initialize(storage, ChecklistConfig::default());
        assert_eq!(reloaded.sections(), store.sections());
        assert_eq!(reloaded.checked(), store.checked());
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refused"))
        }
    }

    #[test]
    fn test_serialize_failure_leaves_stored_record_alone() {
        let storage = MemoryStorage::new().with_entry(SECTIONS_KEY, r#"{"Porch":["Light"]}"#);

        let err = save_record(&storage, SECTIONS_KEY, &Unserializable).unwrap_err();
        assert!(matches!(err, ChecklistError::Serialize(_)));
        assert_eq!(storage.get(SECTIONS_KEY).unwrap(), r#"{"Porch":["Light"]}"#);
    }

    #[test]
    fn test_failed_writes_keep_memory_state() {
        let (mut store, storage) = kitchen();
        storage.set_fail_writes(true);

        store.add_item("Kitchen", "Oven").unwrap();
        assert_eq!(store.items("Kitchen"), ["Stove", "Sink", "Oven"]);
        assert!(matches!(store.save(), Err(ChecklistError::Storage(_))));

        storage.set_fail_writes(false);
        store.toggle_check("Kitchen", "Oven");
        assert_eq!(stored_sections(&storage).get("Kitchen").unwrap().items, vec!["Stove", "Sink", "Oven"]);
    }
}
