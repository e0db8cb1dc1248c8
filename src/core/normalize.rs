//! Canonical-key normalization for lookup-table indexing
//!
//! Source slugs arise from two typing conventions, so every term is
//! registered under two keys: a simple variant (whitespace folded to
//! underscores, punctuation kept) and an aggressive variant (everything
//! outside `[a-z0-9_]` stripped). Both transforms are deterministic and
//! idempotent; keys are never persisted as record fields.

/// Aggressive normalization: lowercase, fold whitespace and hyphens to
/// underscores, collapse every other run of non-alphanumerics into a
/// single underscore, trim leading/trailing underscores.
///
/// # Examples
/// ```
/// use cardmend::core::normalize::normalize_key;
///
/// assert_eq!(normalize_key("Abducens Nerve (CN VI)"), "abducens_nerve_cn_vi");
/// assert_eq!(normalize_key("GABA-A Receptor"), "gaba_a_receptor");
/// ```
pub fn normalize_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    let mut pending_sep = false;

    for c in text.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_sep && !key.is_empty() {
                key.push('_');
            }
            pending_sep = false;
            key.push(c);
        } else {
            // Underscores count as separators too, so runs collapse
            pending_sep = true;
        }
    }

    key
}

/// Simple normalization: lowercase with whitespace folded to underscores.
/// Punctuation survives, matching slugs typed straight from display names.
pub fn normalize_simple(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
