//! Heuristic authorship-style signals.
//!
//! Flags text whose surface statistics look machine-generated: low lexical
//! variety, uniform sentence lengths, and repeated bigrams all push the
//! score up. These are weak signals on short inputs, so texts under roughly
//! 40 words are down-weighted and the report carries a disclaimer. No model,
//! no network, no tokenizer beyond ASCII word extraction.

use serde::{Deserialize, Serialize};

/// Word-count threshold below which the score is scaled down linearly.
const FULL_WEIGHT_WORDS: usize = 40;

/// Raw statistics backing a [`StyleReport`] score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleSignals {
    /// Unique words divided by total words.
    pub type_token_ratio: f64,
    /// Mean words per sentence.
    pub avg_sentence_len: f64,
    /// Population standard deviation of sentence lengths in words.
    pub burstiness: f64,
    /// Fraction of bigram occurrences beyond each bigram's first.
    pub bigram_repetition: f64,
    pub word_count: usize,
}

/// Outcome of a style analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleReport {
    /// Heuristic machine-likeness score in `[0, 1]`.
    pub score: f64,
    /// Absent when the text contained no words.
    pub signals: Option<StyleSignals>,
    pub disclaimer: String,
}

/// Score surface-level style signals for `text`.
pub fn analyze(text: &str) -> StyleReport {
    let words = extract_words(text);
    let word_count = words.len();
    if word_count == 0 {
        return StyleReport {
            score: 0.0,
            signals: None,
            disclaimer: "Empty text.".to_string(),
        };
    }

    let unique: std::collections::HashSet<&str> = words.iter().map(String::as_str).collect();
    let type_token_ratio = unique.len() as f64 / word_count as f64;

    let mut sentence_lens: Vec<usize> = sentences(text)
        .iter()
        .map(|s| extract_words(s).len())
        .collect();
    if sentence_lens.is_empty() {
        sentence_lens.push(word_count);
    }
    let burstiness = pstdev(&sentence_lens);
    let avg_sentence_len =
        sentence_lens.iter().sum::<usize>() as f64 / sentence_lens.len() as f64;

    let bigram_repetition = bigram_repetition_ratio(&words);

    let base = 0.5 * (1.0 - type_token_ratio)
        + 0.3 * (1.0 / (1.0 + burstiness))
        + 0.2 * bigram_repetition;
    let length_factor = (word_count as f64 / FULL_WEIGHT_WORDS as f64).min(1.0);
    let score = (base * length_factor).clamp(0.0, 1.0);

    StyleReport {
        score,
        signals: Some(StyleSignals {
            type_token_ratio,
            avg_sentence_len,
            burstiness,
            bigram_repetition,
            word_count,
        }),
        disclaimer: format!(
            "Heuristic only. Short texts (<{FULL_WEIGHT_WORDS} words) are not reliable."
        ),
    }
}

/// Lowercased ASCII words; apostrophes stay inside a word.
fn extract_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() || ch == '\'' {
            current.push(ch.to_ascii_lowercase());
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Sentence segments split after `.`/`!`/`?` followed by whitespace.
fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?')
            && i + 1 < bytes.len()
            && bytes[i + 1].is_ascii_whitespace()
        {
            let sentence = text[start..=i].trim();
            if !sentence.is_empty() {
                out.push(sentence);
            }
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            start = i;
        } else {
            i += 1;
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        out.push(tail);
    }
    out
}

/// Fraction of bigram occurrences beyond each bigram's first appearance.
fn bigram_repetition_ratio(words: &[String]) -> f64 {
    if words.len() < 2 {
        return 0.0;
    }
    let mut counts: std::collections::HashMap<(&str, &str), usize> = std::collections::HashMap::new();
    for pair in words.windows(2) {
        *counts
            .entry((pair[0].as_str(), pair[1].as_str()))
            .or_insert(0) += 1;
    }
    let repeated_extra: usize = counts.values().map(|&v| v.saturating_sub(1)).sum();
    repeated_extra as f64 / (words.len() - 1) as f64
}

/// Population standard deviation.
fn pstdev(values: &[usize]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    variance.sqrt()
}
