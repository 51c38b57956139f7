// wordmask-core/src/keyword_match.rs
//! Provides the match-candidate record produced by the scanner, plus
//! content-safe debug logging helpers for matched text.

use serde::{Deserialize, Serialize};
use log::debug;

use lazy_static::lazy_static;

lazy_static! {
    /// A static boolean that is initialized once to determine if matched
    /// content is allowed to appear verbatim in debug logs.
    static ref CONTENT_DEBUG_ALLOWED: bool = {
        std::env::var("WORDMASK_ALLOW_DEBUG_CONTENT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A tentative detected occurrence of a keyword.
///
/// All offsets are character indices (Unicode scalar values) into the
/// scanned text, not byte offsets. `start` is where matching began; `end`
/// is one past the last character consumed, including any noise characters
/// absorbed inside the span; `matched_count` counts only genuine keyword
/// characters, so `matched_count <= end - start` always holds.
///
/// Candidates are produced and consumed within a single masking call; none
/// persist across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub start: usize,
    pub end: usize,
    pub matched_count: usize,
}

impl KeywordMatch {
    /// Width of the span in characters, absorbed noise included.
    #[inline]
    pub fn span_len(&self) -> usize {
        self.end - self.start
    }
}

/// Replaces matched content with a length-only placeholder for logging.
pub fn redact_content(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.chars().count() <= MAX_LEN {
        "[MASKED]".to_string()
    } else {
        format!("[MASKED: {} chars]", s.chars().count())
    }
}

fn loggable_content(sensitive: &str) -> String {
    if *CONTENT_DEBUG_ALLOWED {
        sensitive.to_string()
    } else {
        redact_content(sensitive)
    }
}

/// Emits a debug log for a recorded candidate without leaking the matched
/// text unless explicitly allowed via `WORDMASK_ALLOW_DEBUG_CONTENT`.
pub fn log_match_debug(module_path: &str, m: &KeywordMatch, matched_text: &str) {
    debug!(
        "{} Candidate [{}, {}) ({} keyword chars): '{}'",
        module_path,
        m.start,
        m.end,
        m.matched_count,
        loggable_content(matched_text)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_content_short_string() {
        assert_eq!(redact_content("abc"), "[MASKED]".to_string());
    }

    #[test]
    fn test_redact_content_long_string() {
        assert_eq!(redact_content("123456789"), "[MASKED: 9 chars]".to_string());
    }

    #[test]
    fn span_len_includes_absorbed_noise() {
        let m = KeywordMatch { start: 2, end: 7, matched_count: 3 };
        assert_eq!(m.span_len(), 5);
        assert!(m.matched_count <= m.span_len());
    }
}
