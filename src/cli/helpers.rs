//! Shared helper functions for CLI commands

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Counts chars, not bytes: titles and slugs can carry non-ASCII
/// (Greek letters in biochemical names) and slicing those at a byte
/// offset would panic.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_multibyte() {
        // Boundary must never land inside a multi-byte char
        let s = "γ".repeat(40);
        assert_eq!(truncate_str(&s, 60), s);
        assert_eq!(truncate_str(&s, 10), format!("{}...", "γ".repeat(7)));
        assert_eq!(
            truncate_str("GABA (γ-aminobutyric acid)", 12),
            "GABA (γ-a..."
        );
    }
}
