//! Pairwise similarity matrix over a named document set.

use rayon::prelude::*;

use crate::lcs;
use crate::types::SimilarityMatrix;

/// Build the symmetric N×N similarity matrix for `documents`.
///
/// Each unordered pair is scored once with the rolling-row LCS aligner and
/// written to both cells; the diagonal is fixed at `1.0` without computing
/// the self-alignment. Pair computations are independent and run in
/// parallel; each result lands in disjoint cells, so output is invariant
/// under scheduling and document reordering.
///
/// Cost is `O(N² · |a|·|b|)` time with `O(min(|a|,|b|))` extra memory per
/// in-flight pair; the full `O(L²)` DP table is never materialized.
pub fn build_matrix(documents: &[(String, String)]) -> SimilarityMatrix {
    let n = documents.len();

    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();
    let scored: Vec<((usize, usize), f64)> = pairs
        .into_par_iter()
        .map(|(i, j)| ((i, j), lcs::similarity(&documents[i].1, &documents[j].1)))
        .collect();

    let mut scores = vec![vec![0.0f64; n]; n];
    for (row, cell) in scores.iter_mut().enumerate() {
        cell[row] = 1.0;
    }
    for ((i, j), score) in scored {
        scores[i][j] = score;
        scores[j][i] = score;
    }

    let names = documents.iter().map(|(name, _)| name.clone()).collect();
    SimilarityMatrix::new(names, scores)
}
