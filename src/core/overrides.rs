//! Curated manual-override table
//!
//! The curator reasons in term space: each mapping goes from a literal
//! slug to an index *term name*, and is resolved to an identifier here at
//! build time. This keeps human judgment calls (picking a parent concept
//! or an associated pathology when no exact match exists) isolated from
//! the automated tiers.

use std::collections::BTreeMap;

use crate::core::identity::CardId;
use crate::core::index::IndexEntry;

/// Resolve slug→term mappings against the index by exact term-string
/// match. Entries whose term is absent from the index are a curator
/// configuration mistake: dropped with a returned warning, never fatal.
pub fn build_overrides(
    mappings: &[(String, String)],
    index: &[IndexEntry],
) -> (BTreeMap<String, CardId>, Vec<String>) {
    let term_to_id: BTreeMap<&str, &CardId> = index
        .iter()
        .map(|e| (e.term.as_str(), &e.id))
        .collect();

    let mut overrides = BTreeMap::new();
    let mut warnings = Vec::new();

    for (slug, term) in mappings {
        match term_to_id.get(term.as_str()) {
            Some(id) => {
                overrides.insert(slug.clone(), (*id).clone());
            }
            None => warnings.push(format!(
                "override '{}' -> '{}' skipped: term not found in index",
                slug, term
            )),
        }
    }

    (overrides, warnings)
}
