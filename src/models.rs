//! Checklist Models
//!
//! Sections, their items, and per-item checked flags, in the shapes
//! persisted to local storage.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A named, ordered group of checklist items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub items: Vec<String>,
}

impl Section {
    pub fn new(name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Sections in display order
///
/// Persisted as a JSON object whose key order is the section order,
/// so it cannot be a plain map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sections {
    entries: Vec<Section>,
}

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|s| s.name.clone()).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|s| s.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.entries.iter().find(|s| s.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.entries.iter_mut().find(|s| s.name == name)
    }

    /// Insert a section, or replace the items of an existing one in place.
    /// Returns true when the name already existed.
    pub fn upsert(&mut self, name: impl Into<String>, items: Vec<String>) -> bool {
        let name = name.into();
        match self.get_mut(&name) {
            Some(existing) => {
                existing.items = items;
                true
            }
            None => {
                self.entries.push(Section::new(name, items));
                false
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Section> {
        let index = self.position(name)?;
        Some(self.entries.remove(index))
    }

    /// Move the section at `from` so it ends up at `to`.
    ///
    /// An out-of-range `from` does nothing; `to` past the end means last.
    /// Returns true when the order changed.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        if from >= self.entries.len() {
            return false;
        }
        let section = self.entries.remove(from);
        let to = to.min(self.entries.len());
        self.entries.insert(to, section);
        from != to
    }
}

impl<N, I> FromIterator<(N, I)> for Sections
where
    N: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut sections = Sections::new();
        for (name, items) in iter {
            sections.upsert(name, items.into_iter().map(Into::into).collect());
        }
        sections
    }
}

impl Serialize for Sections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for section in &self.entries {
            map.serialize_entry(&section.name, &section.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Sections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionsVisitor;

        impl<'de> Visitor<'de> for SectionsVisitor {
            type Value = Sections;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of section name to item list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Sections, A::Error> {
                let mut sections = Sections::new();
                // Repeated keys: last value wins, first position is kept
                while let Some((name, items)) = access.next_entry::<String, Vec<String>>()? {
                    sections.upsert(name, items);
                }
                Ok(sections)
            }
        }

        deserializer.deserialize_map(SectionsVisitor)
    }
}

/// Section name -> item name -> checked. Absent entries read as unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckedState(BTreeMap<String, BTreeMap<String, bool>>);

impl CheckedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, section: &str, item: &str) -> bool {
        self.0
            .get(section)
            .and_then(|items| items.get(item))
            .copied()
            .unwrap_or(false)
    }

    /// Flip the flag and return the new value
    pub fn toggle(&mut self, section: &str, item: &str) -> bool {
        let flag = self
            .0
            .entry(section.to_string())
            .or_default()
            .entry(item.to_string())
            .or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn section(&self, section: &str) -> Option<&BTreeMap<String, bool>> {
        self.0.get(section)
    }

    pub fn remove_section(&mut self, section: &str) -> bool {
        self.0.remove(section).is_some()
    }

    pub fn remove_item(&mut self, section: &str, item: &str) -> bool {
        self.0
            .get_mut(section)
            .map(|items| items.remove(item).is_some())
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
