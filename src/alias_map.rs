//! Artifact-id to group-id alias map
//!
//! Backed by a `BTreeMap` so serialization naturally emits keys in sorted
//! order. Insertion is first-seen-wins: later records for an already
//! mapped artifact id are discarded silently.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

/// Seeded override present in every generated map
pub const SPRING_BOOT_OVERRIDE: (&str, &str) = ("spring.boot", "org.springframework.boot");

/// The alias map built from a coordinate dump
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct AliasMap {
    entries: BTreeMap<String, String>,
}

impl AliasMap {
    /// Create a map pre-populated with the manual overrides.
    ///
    /// Overrides exist for well-known components whose coordinates never
    /// appear in the dump in an aliasable form.
    pub fn with_overrides() -> Self {
        let mut entries = BTreeMap::new();
        let (artifact, group) = SPRING_BOOT_OVERRIDE;
        entries.insert(artifact.to_string(), group.to_string());
        Self { entries }
    }

    /// Insert `artifact_id -> group_id` unless the artifact id is already
    /// mapped. Returns `false` when the key existed (first-seen-wins).
    pub fn insert_first(&mut self, artifact_id: String, group_id: String) -> bool {
        match self.entries.entry(artifact_id) {
            Entry::Vacant(slot) => {
                slot.insert(group_id);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Look up the group id mapped to an artifact id
    pub fn get(&self, artifact_id: &str) -> Option<&str> {
        self.entries.get(artifact_id).map(String::as_str)
    }

    /// Number of aliases in the map, including seeded overrides
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the map holds no entries (never the case after seeding)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a pretty-printed JSON object: keys sorted, 2-space
    /// indentation, trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.entries)?;
        out.push('\n');
        Ok(out)
    }
}

impl Default for AliasMap {
    fn default() -> Self {
        Self::with_overrides()
    }
}
