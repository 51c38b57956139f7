// wordmask-core/src/scanner.rs
//! Walks the keyword index over input text, tolerating classified noise
//! inside in-progress matches.
//!
//! For every start offset the scanner runs one independent attempt: descend
//! the trie per folded character, absorb skippable noise once at least one
//! keyword character has matched, and stop at the first character that
//! neither descends nor skips. At most one candidate survives per start
//! offset (the longest completion). Attempts at different starts revisit
//! the same characters, so the worst case is quadratic, but the trie depth
//! caps the useful work of each attempt.
//!
//! License: MIT OR APACHE 2.0

use log::{log_enabled, Level};

use crate::keyword_match::{log_match_debug, KeywordMatch};
use crate::noise::NoiseClassifier;
use crate::trie::{fold_char, KeywordTrie};

/// Scans `chars` and returns every surviving match candidate, in
/// non-decreasing `start` order.
pub fn scan(trie: &KeywordTrie, noise: &NoiseClassifier, chars: &[char]) -> Vec<KeywordMatch> {
    let mut candidates = Vec::new();

    for start in 0..chars.len() {
        let mut node = trie.root();
        let mut matched_count = 0usize;
        let mut best: Option<KeywordMatch> = None;
        let mut cursor = start;

        while cursor < chars.len() {
            let folded = fold_char(chars[cursor]);

            if let Some(next) = node.child(folded) {
                node = next;
                matched_count += 1;
                cursor += 1;
                if node.is_terminal() {
                    // Within one attempt `matched_count` only grows, so a
                    // later completion always supersedes a shorter one at
                    // the same start.
                    best = Some(KeywordMatch {
                        start,
                        end: cursor,
                        matched_count,
                    });
                }
            } else if matched_count > 0 && noise.is_skippable(folded) {
                // Absorbed noise: advance without descending. The recorded
                // end moves only when a further keyword character matches.
                cursor += 1;
            } else {
                break;
            }
        }

        if let Some(m) = best {
            if log_enabled!(Level::Debug) {
                let matched_text: String = chars[m.start..m.end].iter().collect();
                log_match_debug("[wordmask_core::scanner]", &m, &matched_text);
            }
            candidates.push(m);
        }
    }

    candidates
}
