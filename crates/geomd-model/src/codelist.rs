//! Codelist model: closed enumerations of coded values mapped to labels.
//!
//! ISO 19139 codelists are referenced two ways in the wild: by code name
//! (e.g. `license` in standard documents) and by a small numeric code
//! (e.g. `005` in ArcGIS exports). Each codelist therefore carries both a
//! name table and a number table. Registries are built once at startup
//! and shared read-only across the batch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Normalise a standard code name for name-table keys: lowercase, strip
/// whitespace, hyphens and slashes, drop any trailing parenthetical.
pub fn normalise_code(raw: &str) -> String {
    let head = raw.split('(').next().unwrap_or("");
    head.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '/')
        .flat_map(char::to_lowercase)
        .collect()
}

/// A single codelist with name and number lookup tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Codelist {
    /// Codelist identifier (e.g. "MD_RestrictionCode").
    pub name: String,
    /// Normalised code name -> display label.
    pub by_name: BTreeMap<String, String>,
    /// Numeric code -> display label.
    pub by_num: BTreeMap<u32, String>,
}

impl Codelist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            by_name: BTreeMap::new(),
            by_num: BTreeMap::new(),
        }
    }

    /// Resolve a raw coded value to its display label.
    ///
    /// Tries the name table first (case-insensitive, whitespace and
    /// hyphens ignored), then a tolerant integer parse against the number
    /// table ("005" resolves as 5). Unresolved codes pass through
    /// unchanged; they are never dropped or treated as errors.
    pub fn resolve(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return String::new();
        }
        let key: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        if let Some(label) = self.by_name.get(&key) {
            return label.clone();
        }
        if let Ok(num) = trimmed.parse::<u32>()
            && let Some(label) = self.by_num.get(&num)
        {
            return label.clone();
        }
        trimmed.to_string()
    }
}

/// Registry of all known codelists, immutable after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodelistRegistry {
    codelists: BTreeMap<String, Codelist>,
}

impl CodelistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, codelist: Codelist) {
        self.codelists.insert(codelist.name.clone(), codelist);
    }

    pub fn get(&self, name: &str) -> Option<&Codelist> {
        self.codelists.get(name)
    }

    /// Codelists in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Codelist> {
        self.codelists.values()
    }

    /// Resolve a raw value against a named codelist.
    ///
    /// Empty input returns empty; an unknown codelist name returns the
    /// trimmed input unchanged.
    pub fn resolve(&self, raw: &str, codelist_name: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return String::new();
        }
        match self.codelists.get(codelist_name) {
            Some(codelist) => codelist.resolve(trimmed),
            None => trimmed.to_string(),
        }
    }

    /// (codelist, numeric code, label) rows for every known codelist,
    /// ordered by codelist name then code. Used for report display.
    pub fn resolution_table(&self) -> Vec<(String, String, String)> {
        let mut rows = Vec::new();
        for codelist in self.codelists.values() {
            for (num, label) in &codelist.by_num {
                rows.push((codelist.name.clone(), num.to_string(), label.clone()));
            }
        }
        rows
    }
}
