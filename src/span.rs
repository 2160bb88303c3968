//! Consolidation of raw match offsets into highlightable spans.

use crate::types::{Match, Span};

/// Merge raw matches into maximal, non-overlapping, gap-preserving spans.
///
/// Input order is not trusted: matches are re-sorted before the sweep even
/// though the finders emit them sorted. Adjacent and overlapping matches are
/// fused; the union of covered positions is preserved exactly. Zero-length
/// matches cover nothing and are dropped.
pub fn merge(matches: &[Match]) -> Vec<Span> {
    let mut sorted: Vec<Match> = matches.iter().copied().filter(|m| m.length > 0).collect();
    sorted.sort_unstable();

    let mut spans: Vec<Span> = Vec::new();
    for m in sorted {
        match spans.last_mut() {
            Some(open) if m.start <= open.end() => {
                let end = open.end().max(m.end());
                open.length = end - open.start;
            }
            _ => spans.push(Span::new(m.start, m.length)),
        }
    }
    spans
}
