//! Lookup table: normalized key to card identifier
//!
//! Built fresh per run from the reference index, then augmented with the
//! titles already present in the working dataset. Later insertions win on
//! key collision, and the loader inserts index terms before dataset
//! titles: a card's own declared title is a higher-confidence signal for
//! its identity than an independently curated index term.

use std::collections::BTreeMap;

use crate::core::card::Dataset;
use crate::core::identity::CardId;
use crate::core::index::{comma_inversion, IndexEntry, InversionRule};
use crate::core::normalize::{normalize_key, normalize_simple};

/// Mapping from canonical lookup key to identifier.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    map: BTreeMap<String, CardId>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a display term under both normalization variants.
    /// Empty terms (and terms that normalize to nothing) are skipped.
    pub fn insert_term(&mut self, term: &str, id: &CardId) {
        for key in [normalize_key(term), normalize_simple(term)] {
            if !key.is_empty() {
                self.map.insert(key, id.clone());
            }
        }
    }

    /// Build a table from index entries, registering the inverted form of
    /// each term as well when the inversion rule produces one.
    pub fn from_index(entries: &[IndexEntry], invert: InversionRule) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert_term(&entry.term, &entry.id);
            if let Some(inverted) = invert(&entry.term) {
                table.insert_term(&inverted, &entry.id);
            }
        }
        table
    }

    /// Build a table with the default comma-inversion convention.
    pub fn from_index_default(entries: &[IndexEntry]) -> Self {
        Self::from_index(entries, comma_inversion)
    }

    /// Extend the table with every card's own title mapped to its own
    /// identifier, overwriting any prior index entry for the same key.
    ///
    /// Dataset keys that are not well-formed identifiers are skipped;
    /// resolving a slug to a broken id would only spread the damage.
    /// Titleless records contribute nothing.
    pub fn augment(&mut self, dataset: &Dataset) {
        for (id, card) in dataset {
            let Ok(id) = CardId::parse(id) else { continue };
            if let Some(title) = &card.title {
                self.insert_term(title, &id);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&CardId> {
        self.map.get(key)
    }

    /// Keys in lexical order; the fuzzy tier relies on this for
    /// deterministic tie-breaking.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
