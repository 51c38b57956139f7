// wordmask-core/src/shared.rs
//! Optional process-wide filter handle.
//!
//! Some hosts want one filter for the whole process without threading a
//! `WordFilter` through every call site. This module offers that as a thin
//! wrapper over a global `RwLock`: many concurrent maskers once built,
//! exclusive access for keyword insertion. The core API never requires it;
//! construct and pass your own [`WordFilter`] for isolated keyword sets.

use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::engine::WordFilter;

static SHARED_FILTER: Lazy<RwLock<WordFilter>> = Lazy::new(|| RwLock::new(WordFilter::new()));

/// Merges keywords into the process-wide filter.
///
/// Complete all insertions before the first masking call, or accept that
/// in-flight maskers observe the pre-insertion keyword set.
pub fn insert_shared_keywords<I, S>(keywords: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SHARED_FILTER.write().unwrap().insert_keywords(keywords);
}

/// Masks `text` with the process-wide filter and the default mask character.
pub fn mask_shared(text: &str) -> String {
    SHARED_FILTER.read().unwrap().mask(text)
}

/// Masks `text` with the process-wide filter and an explicit mask character.
pub fn mask_shared_with(text: &str, mask_char: char) -> String {
    SHARED_FILTER.read().unwrap().mask_with(text, mask_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_filter_masks_after_insertion() {
        // Keyword chosen to be unique to this test; the shared filter is
        // process-global and other tests may add their own entries.
        insert_shared_keywords(["zebrafish"]);
        assert_eq!(mask_shared("a zebrafish swam"), "a ********* swam");
    }
}
