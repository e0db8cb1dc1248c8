//! The link-resolution pipeline
//!
//! Every connection target runs through an ordered chain of fallible
//! lookup tiers, short-circuiting on the first success:
//!
//! 1. already-valid: the target is a well-formed identifier, untouched
//! 2. exact: aggressive-normalized key found in the lookup table
//! 3. fuzzy: best similarity match over the table's key set, accepted
//!    only at or above the cutoff
//! 4. manual: the raw target is a literal key in the curated overrides
//!
//! Anything else passes through unchanged as an unresolved slug. The
//! whole pass is a pure transformation: snapshot in, new snapshot out.

use std::collections::BTreeMap;

use crate::core::card::Dataset;
use crate::core::identity::CardId;
use crate::core::lookup::LookupTable;
use crate::core::normalize::normalize_key;

/// Default similarity cutoff for the fuzzy tier.
///
/// Biased toward precision: leaving a slug unresolved is recoverable,
/// silently wiring a wrong cross-reference is not. Treat as a tunable
/// constant, not a derived truth.
pub const DEFAULT_SIMILARITY_CUTOFF: f64 = 0.8;

/// How many diagnostic samples to keep per category.
const SAMPLE_LIMIT: usize = 20;

/// Knobs for one resolution pass.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Enable the fuzzy tier
    pub fuzzy: bool,
    /// Similarity acceptance cutoff on a 0-1 scale
    pub cutoff: f64,
    /// Curated literal-slug overrides, already resolved to identifiers
    pub overrides: BTreeMap<String, CardId>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            fuzzy: false,
            cutoff: DEFAULT_SIMILARITY_CUTOFF,
            overrides: BTreeMap::new(),
        }
    }
}

/// How a single connection target was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    AlreadyValid,
    Exact(CardId),
    Fuzzy {
        id: CardId,
        matched_key: String,
        score: f64,
    },
    Manual(CardId),
    Unresolved,
}

impl Resolution {
    /// The identifier to rewrite the target to, if any tier matched.
    pub fn resolved_id(&self) -> Option<&CardId> {
        match self {
            Resolution::Exact(id) | Resolution::Manual(id) => Some(id),
            Resolution::Fuzzy { id, .. } => Some(id),
            Resolution::AlreadyValid | Resolution::Unresolved => None,
        }
    }
}

/// A recorded fuzzy acceptance, for diagnostic reporting.
#[derive(Debug, Clone)]
pub struct FuzzySample {
    pub slug: String,
    pub matched_key: String,
    pub id: CardId,
    pub score: f64,
}

/// Counters accumulated over one resolution pass.
#[derive(Debug, Clone, Default)]
pub struct ResolveStats {
    pub total_links: usize,
    pub already_valid: usize,
    pub exact_fixed: usize,
    pub fuzzy_fixed: usize,
    pub manual_fixed: usize,
    pub unresolved: usize,
    /// Small sample of accepted fuzzy matches
    pub fuzzy_samples: Vec<FuzzySample>,
    /// Small sample of targets no tier could resolve
    pub unresolved_samples: Vec<String>,
}

impl ResolveStats {
    pub fn fixed_total(&self) -> usize {
        self.exact_fixed + self.fuzzy_fixed + self.manual_fixed
    }
}

/// Normalized string similarity on a 0-1 scale.
///
/// The metric is isolated here so it can be swapped without touching the
/// tier logic; the cutoff's precision/recall balance should be re-derived
/// if it changes.
fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

fn try_exact(key: &str, table: &LookupTable) -> Option<CardId> {
    table.get(key).cloned()
}

/// Scan the whole key set for the best match at or above the cutoff.
///
/// Keys are visited in lexical order and only a strictly better score
/// displaces the current best, so score ties break toward the lexically
/// smallest key and repeated runs pick the same candidate.
fn try_fuzzy(key: &str, table: &LookupTable, cutoff: f64) -> Option<(String, CardId, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for candidate in table.keys() {
        let score = similarity(key, candidate);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    let (matched, score) = best?;
    if score >= cutoff {
        let id = table.get(matched).cloned()?;
        Some((matched.to_string(), id, score))
    } else {
        None
    }
}

fn try_override(target: &str, overrides: &BTreeMap<String, CardId>) -> Option<CardId> {
    overrides.get(target).cloned()
}

/// Run the tier chain for a single connection target.
pub fn resolve_target(target: &str, table: &LookupTable, opts: &ResolveOptions) -> Resolution {
    if CardId::is_valid(target) {
        return Resolution::AlreadyValid;
    }

    let key = normalize_key(target);
    if let Some(id) = try_exact(&key, table) {
        return Resolution::Exact(id);
    }

    if opts.fuzzy {
        if let Some((matched_key, id, score)) = try_fuzzy(&key, table, opts.cutoff) {
            return Resolution::Fuzzy {
                id,
                matched_key,
                score,
            };
        }
    }

    // Manual overrides match the raw slug exactly as the curator typed it
    if let Some(id) = try_override(target, &opts.overrides) {
        return Resolution::Manual(id);
    }

    Resolution::Unresolved
}

/// Resolve every connection in every card, producing a new dataset and
/// the pass statistics. The input dataset is left untouched.
pub fn resolve(dataset: &Dataset, table: &LookupTable, opts: &ResolveOptions) -> (Dataset, ResolveStats) {
    let mut stats = ResolveStats::default();
    let mut out = Dataset::new();

    for (id, card) in dataset {
        let mut card = card.clone();
        for conn in &mut card.connections {
            stats.total_links += 1;
            match resolve_target(&conn.to, table, opts) {
                Resolution::AlreadyValid => stats.already_valid += 1,
                Resolution::Exact(id) => {
                    conn.to = id.to_string();
                    stats.exact_fixed += 1;
                }
                Resolution::Fuzzy {
                    id,
                    matched_key,
                    score,
                } => {
                    if stats.fuzzy_samples.len() < SAMPLE_LIMIT {
                        stats.fuzzy_samples.push(FuzzySample {
                            slug: conn.to.clone(),
                            matched_key,
                            id: id.clone(),
                            score,
                        });
                    }
                    conn.to = id.to_string();
                    stats.fuzzy_fixed += 1;
                }
                Resolution::Manual(id) => {
                    conn.to = id.to_string();
                    stats.manual_fixed += 1;
                }
                Resolution::Unresolved => {
                    if stats.unresolved_samples.len() < SAMPLE_LIMIT {
                        stats.unresolved_samples.push(conn.to.clone());
                    }
                    stats.unresolved += 1;
                }
            }
        }
        out.insert(id.clone(), card);
    }

    (out, stats)
}

/// Count connections whose target is a well-formed identifier.
///
/// Resolution must never decrease this between snapshots; the `compare`
/// command uses it as the regression check between pipeline stages.
pub fn valid_link_count(dataset: &Dataset) -> usize {
    dataset
        .values()
        .flat_map(|c| &c.connections)
        .filter(|c| CardId::is_valid(&c.to))
        .count()
}
