//! Knowledge-card record model and whole-file snapshot I/O
//!
//! A dataset snapshot is a single JSON object mapping identifier to card.
//! Cards are created upstream by transcript extraction; the only mutation
//! this crate performs is rewriting connection targets, so unknown fields
//! are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// An outbound cross-reference from one card to another.
///
/// Pre-resolution, `to` is either a valid identifier or a free-text slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Relation kind, e.g. "associated_with", "causes"
    #[serde(rename = "type")]
    pub kind: String,
    /// Target: a card identifier or an unresolved slug
    pub to: String,
}

/// A single knowledge-card record.
///
/// Every field except `connections` is best-effort: extraction output is
/// frequently truncated, so missing fields must survive load and get
/// reported by the schema validator rather than failing the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Absent on truncated records; absence must survive a save so the
    /// only mutation a repair pass makes is to connection targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Kept as a raw string so drifted values survive load; the schema
    /// validator checks it against the closed type set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classification_path: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Structured text block (definition, atAGlance, takeAway, mermaid).
    /// Left as raw JSON: contents are display data this crate never edits.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub content: Value,

    #[serde(default)]
    pub connections: Vec<Connection>,

    /// Unknown fields pass through so repair never loses data.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A full dataset snapshot keyed by identifier.
///
/// BTreeMap keeps serialization order deterministic, so re-running a
/// pipeline stage on identical input produces byte-identical output.
pub type Dataset = BTreeMap<String, Card>;

/// Errors from snapshot load/store
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Load a dataset snapshot from a JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset, SnapshotError> {
    let content = fs::read_to_string(path).map_err(|e| SnapshotError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| SnapshotError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write a dataset snapshot wholesale.
///
/// Serializes fully in memory, writes to a sibling temp file, then
/// renames over the destination: a failed run leaves the previous
/// snapshot untouched.
pub fn save_dataset(path: &Path, dataset: &Dataset) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(dataset).map_err(|e| SnapshotError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    let tmp = path.with_extension("json.tmp");
    let write_err = |e| SnapshotError::Write {
        path: path.display().to_string(),
        source: e,
    };
    fs::write(&tmp, json).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)?;
    Ok(())
}

/// Load raw JSON for schema-compliance checking, without the typed model
/// papering over drift.
pub fn load_raw(path: &Path) -> Result<BTreeMap<String, Value>, SnapshotError> {
    let content = fs::read_to_string(path).map_err(|e| SnapshotError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| SnapshotError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
