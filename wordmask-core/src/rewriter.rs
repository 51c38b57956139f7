// wordmask-core/src/rewriter.rs
//! Resolves overlapping match candidates and rewrites scanned text into its
//! masked form.
//!
//! Because stray letters count as noise, one genuine occurrence can be
//! witnessed by several overlapping candidates: a noisy attempt that begins
//! on an earlier keyword character can stretch across the text and shadow
//! the tight occurrence it ends on. Resolution ranks candidates by matched
//! keyword characters, then by span tightness (least absorbed noise), and
//! suppresses anything overlapping an accepted span. Rendering is then a
//! single left-to-right pass over an output buffer, so every retained
//! offset stays valid.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::keyword_match::KeywordMatch;

/// Resolves overlaps among `candidates`, returning the surviving spans in
/// start order.
///
/// Ranking: more matched keyword characters first (the cross-start
/// counterpart of the longest-match rule), then the tighter span, then the
/// earlier start. A candidate overlapping an already-accepted span is
/// suppressed.
pub fn resolve_overlaps(candidates: &[KeywordMatch]) -> Vec<KeywordMatch> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| {
        b.matched_count
            .cmp(&a.matched_count)
            .then(a.span_len().cmp(&b.span_len()))
            .then(a.start.cmp(&b.start))
    });

    let mut accepted: Vec<KeywordMatch> = Vec::new();
    for m in ranked {
        if accepted
            .iter()
            .all(|kept| m.end <= kept.start || m.start >= kept.end)
        {
            accepted.push(m);
        } else {
            debug!(
                "Suppressing overlapping candidate [{}, {}) ({} keyword chars).",
                m.start, m.end, m.matched_count
            );
        }
    }

    accepted.sort_by_key(|m| m.start);
    accepted
}

/// Applies `candidates` to `chars`, collapsing each surviving span
/// `[start, end)` to exactly `matched_count` repetitions of `mask_char`.
///
/// Overlaps are resolved first via [`resolve_overlaps`]. Absorbed noise
/// inside a span is deleted, not individually masked, so the output may be
/// shorter than the input. An empty candidate list returns the input
/// unchanged.
pub fn apply_masks(chars: &[char], candidates: &[KeywordMatch], mask_char: char) -> String {
    if candidates.is_empty() {
        return chars.iter().collect();
    }

    let resolved = resolve_overlaps(candidates);
    let mut masked = String::with_capacity(chars.len());
    let mut last_end = 0usize;

    for m in &resolved {
        masked.extend(chars[last_end..m.start].iter());
        masked.extend(std::iter::repeat(mask_char).take(m.matched_count));
        last_end = m.end;
    }
    masked.extend(chars[last_end..].iter());

    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn masks_a_single_span() {
        let input = chars("This is text word!");
        let m = KeywordMatch { start: 8, end: 12, matched_count: 4 };
        assert_eq!(apply_masks(&input, &[m], '*'), "This is **** word!");
    }

    #[test]
    fn collapses_absorbed_noise() {
        // Span covers "t-e-x-t" but only four keyword characters matched.
        let input = chars("a t-e-x-t b");
        let m = KeywordMatch { start: 2, end: 9, matched_count: 4 };
        assert_eq!(apply_masks(&input, &[m], '*'), "a **** b");
    }

    #[test]
    fn empty_candidates_return_input_unchanged() {
        let input = chars("nothing to do");
        assert_eq!(apply_masks(&input, &[], '*'), "nothing to do");
    }

    #[test]
    fn tightest_witness_wins_among_equal_matches() {
        // A noisy attempt starting on an earlier keyword letter shadows the
        // genuine tight occurrence; the tight span must win.
        let input = chars("This is text word!");
        let candidates = [
            KeywordMatch { start: 0, end: 12, matched_count: 4 },
            KeywordMatch { start: 8, end: 12, matched_count: 4 },
        ];
        assert_eq!(apply_masks(&input, &candidates, '*'), "This is **** word!");
    }

    #[test]
    fn more_matched_characters_beat_tighter_spans() {
        let resolved = resolve_overlaps(&[
            KeywordMatch { start: 0, end: 3, matched_count: 3 },
            KeywordMatch { start: 2, end: 4, matched_count: 2 },
        ]);
        assert_eq!(
            resolved,
            vec![KeywordMatch { start: 0, end: 3, matched_count: 3 }]
        );
    }

    #[test]
    fn overlapping_run_collapses_to_tightest_span() {
        let input = chars("fffilter tail");
        let candidates = [
            KeywordMatch { start: 0, end: 8, matched_count: 6 },
            KeywordMatch { start: 1, end: 8, matched_count: 6 },
            KeywordMatch { start: 2, end: 8, matched_count: 6 },
        ];
        assert_eq!(apply_masks(&input, &candidates, '*'), "ff****** tail");
    }

    #[test]
    fn disjoint_spans_keep_gaps_intact() {
        let input = chars("ab .. ab");
        let candidates = [
            KeywordMatch { start: 0, end: 2, matched_count: 2 },
            KeywordMatch { start: 6, end: 8, matched_count: 2 },
        ];
        assert_eq!(apply_masks(&input, &candidates, '#'), "## .. ##");
    }

    #[test]
    fn resolve_keeps_disjoint_survivors_in_start_order() {
        let resolved = resolve_overlaps(&[
            KeywordMatch { start: 0, end: 4, matched_count: 4 },
            KeywordMatch { start: 3, end: 13, matched_count: 4 },
            KeywordMatch { start: 9, end: 13, matched_count: 4 },
        ]);
        assert_eq!(
            resolved,
            vec![
                KeywordMatch { start: 0, end: 4, matched_count: 4 },
                KeywordMatch { start: 9, end: 13, matched_count: 4 },
            ]
        );
    }

    #[test]
    fn supplementary_plane_text_survives_untouched() {
        let input = chars("🦀 ab 🦀");
        let candidates = [KeywordMatch { start: 2, end: 4, matched_count: 2 }];
        assert_eq!(apply_masks(&input, &candidates, '*'), "🦀 ** 🦀");
    }
}
