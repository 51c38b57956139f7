// wordmask-core/src/engine.rs
//! The keyword masking engine.
//!
//! A [`WordFilter`] owns exactly one keyword index and one noise classifier
//! for its lifetime. Instances are caller-constructed and independent:
//! separate filters share no state, which keeps the engine testable with
//! isolated keyword sets. A process-wide convenience handle lives in
//! [`crate::shared`].
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};

use crate::config::{FilterConfig, DEFAULT_MASK_CHAR};
use crate::keyword_match::KeywordMatch;
use crate::noise::NoiseClassifier;
use crate::rewriter;
use crate::scanner;
use crate::trie::KeywordTrie;

/// Detects and masks configured keywords inside arbitrary text, tolerating
/// noise characters interleaved between the letters of a keyword.
///
/// Keyword insertion is additive and must be completed before masking
/// begins (or access serialized externally); `mask` and `find_matches` take
/// `&self` and may run concurrently with each other.
#[derive(Debug, Default)]
pub struct WordFilter {
    trie: KeywordTrie,
    noise: NoiseClassifier,
}

impl WordFilter {
    /// Creates an empty filter. Until keywords are inserted, masking passes
    /// input through unchanged.
    pub fn new() -> Self {
        Self {
            trie: KeywordTrie::new(),
            noise: NoiseClassifier::new(),
        }
    }

    /// Creates a filter pre-loaded with a configuration's keyword list.
    pub fn from_config(config: &FilterConfig) -> Self {
        let mut filter = Self::new();
        filter.insert_keywords(&config.keywords);
        filter
    }

    /// Merges keywords into the engine's index.
    ///
    /// Calling this more than once extends the existing set rather than
    /// discarding prior state. Empty entries are silently skipped. The only
    /// failure mode is allocation exhaustion, which aborts the process, so
    /// the operation is infallible at this boundary.
    pub fn insert_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.trie.extend(keywords);
        info!("Filter now holds {} keywords.", self.trie.keyword_count());
    }

    /// Drops every configured keyword, restoring pass-through behavior.
    ///
    /// Replacement semantics are deliberately a separate operation from the
    /// additive [`WordFilter::insert_keywords`]: clear, then insert afresh.
    pub fn clear(&mut self) {
        self.trie = KeywordTrie::new();
        debug!("Filter keyword index cleared.");
    }

    /// True if no keywords have been configured.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Number of distinct configured keywords.
    pub fn keyword_count(&self) -> usize {
        self.trie.keyword_count()
    }

    /// Scans `text` without rewriting it and returns the recorded match
    /// candidates (at most one per start offset, overlaps unresolved),
    /// char-indexed, in non-decreasing start order.
    pub fn find_matches(&self, text: &str) -> Vec<KeywordMatch> {
        if self.trie.is_empty() {
            return Vec::new();
        }
        let chars: Vec<char> = text.chars().collect();
        scanner::scan(&self.trie, &self.noise, &chars)
    }

    /// Masks every detected keyword occurrence with [`DEFAULT_MASK_CHAR`].
    pub fn mask(&self, text: &str) -> String {
        self.mask_with(text, DEFAULT_MASK_CHAR)
    }

    /// Masks every detected keyword occurrence with `mask_char`.
    ///
    /// Each matched span collapses to as many mask characters as keyword
    /// characters were matched; absorbed noise is deleted. A filter that
    /// was never given keywords returns the input unchanged (fail open).
    pub fn mask_with(&self, text: &str, mask_char: char) -> String {
        self.mask_with_summary(text, mask_char).0
    }

    /// Masks `text` and additionally reports how many spans were rewritten,
    /// for hosts that surface a masking summary.
    pub fn mask_with_summary(&self, text: &str, mask_char: char) -> (String, usize) {
        if self.trie.is_empty() {
            debug!("Mask requested on an empty filter; passing input through.");
            return (text.to_string(), 0);
        }

        let chars: Vec<char> = text.chars().collect();
        let candidates = scanner::scan(&self.trie, &self.noise, &chars);
        let resolved = rewriter::resolve_overlaps(&candidates);
        debug!(
            "Masking {} span(s) ({} candidate(s)) across {} characters.",
            resolved.len(),
            candidates.len(),
            chars.len()
        );
        let occurrences = resolved.len();
        (rewriter::apply_masks(&chars, &resolved, mask_char), occurrences)
    }
}

/// One-shot convenience: builds a throwaway filter from `config` and masks
/// `text` with the configured mask character.
pub fn mask_string(config: &FilterConfig, text: &str) -> String {
    WordFilter::from_config(config).mask_with(text, config.mask_char)
}
