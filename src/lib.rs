//! cardmend: knowledge-card dataset repair
//!
//! A batch toolkit for repairing and cross-linking knowledge-card
//! datasets recovered from truncated model-output transcripts: resolves
//! free-text connection slugs to canonical identifiers against an
//! authoritative index, and reports on schema compliance, coverage, and
//! regressions between pipeline stages.

pub mod cli;
pub mod core;
pub mod schema;
