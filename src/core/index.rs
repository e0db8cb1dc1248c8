//! Authoritative reference index: terms, identifiers, entry kinds
//!
//! The index file is an ordered sequence of entry objects curated
//! externally. It is ground truth, loaded once per run and never written.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::card::SnapshotError;
use crate::core::identity::CardId;

/// Category marker on an index entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A primary topic; the set against which dataset completeness is checked
    MainEntry,
    /// Anything else (sub-entries, see-also rows)
    #[serde(other)]
    SubEntry,
}

/// One row of the reference index.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexEntry {
    /// Canonical display name, e.g. "Vagus nerve (CN X)" or "Acid, Valproic"
    pub term: String,
    pub id: CardId,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl IndexEntry {
    pub fn is_main_entry(&self) -> bool {
        self.kind == EntryKind::MainEntry
    }
}

/// A term-inversion convention for index display names.
///
/// Medical indexes file compound terms qualifier-last ("Acid, Valproic");
/// slugs arrive qualifier-first ("valproic acid"). The rule is pluggable
/// so other index formats can substitute their own convention.
pub type InversionRule = fn(&str) -> Option<String>;

/// Default inversion: "Noun, Qualifier" becomes "Qualifier Noun".
/// Terms without exactly one comma are left alone.
pub fn comma_inversion(term: &str) -> Option<String> {
    let (noun, qualifier) = term.split_once(',')?;
    let (noun, qualifier) = (noun.trim(), qualifier.trim());
    if noun.is_empty() || qualifier.is_empty() || qualifier.contains(',') {
        return None;
    }
    Some(format!("{} {}", qualifier, noun))
}

/// Load the reference index from a JSON file.
pub fn load_index(path: &Path) -> Result<Vec<IndexEntry>, SnapshotError> {
    let content = fs::read_to_string(path).map_err(|e| SnapshotError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| SnapshotError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_comma_inversion() {
        assert_eq!(
            comma_inversion("Acid, Valproic").as_deref(),
            Some("Valproic Acid")
        );
        assert_eq!(
            comma_inversion("Nerve, Abducens").as_deref(),
            Some("Abducens Nerve")
        );
    }

    #[test]
    fn test_comma_inversion_passes_plain_terms() {
        assert_eq!(comma_inversion("Valproate"), None);
        assert_eq!(comma_inversion("GABA-A Receptor"), None);
    }

    #[test]
    fn test_comma_inversion_rejects_degenerate_forms() {
        assert_eq!(comma_inversion("Acid,"), None);
        assert_eq!(comma_inversion(", Valproic"), None);
        assert_eq!(comma_inversion("a, b, c"), None);
    }

    #[test]
    fn test_load_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.json");
        fs::write(
            &path,
            r#"[
                {"term": "Valproate", "id": "a1b2c3d4", "type": "main_entry"},
                {"term": "Acid, Valproic", "id": "a1b2c3d4", "type": "see_also"}
            ]"#,
        )
        .unwrap();

        let entries = load_index(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_main_entry());
        assert_eq!(entries[1].kind, EntryKind::SubEntry);
        assert_eq!(entries[1].id.as_str(), "a1b2c3d4");
    }

    #[test]
    fn test_malformed_index_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.json");
        fs::write(&path, "[{").unwrap();
        assert!(matches!(
            load_index(&path).unwrap_err(),
            SnapshotError::Parse { .. }
        ));
    }
}
