//! Term-count vectorization over a per-request corpus.
//!
//! Vectors are raw term counts: no inverse-document-frequency weighting
//! and no length normalization before cosine scoring. That matches the
//! behavior the job board shipped with, and changing it would reorder
//! recommendations.

use std::collections::{HashMap, HashSet};

/// Splits a document into lowercase word tokens. Word characters are
/// letters, digits, and underscore; any run of anything else separates
/// tokens.
pub fn tokenize(doc: &str) -> Vec<String> {
    doc.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds one term-count vector per document over a shared vocabulary.
///
/// The vocabulary is every distinct token across the corpus in
/// first-seen order. Order is an implementation artifact — only term
/// identity matters, and every vector in the batch is indexed by the
/// same ordering. An empty document produces an all-zero vector.
pub fn term_frequency_vectors(docs: &[String]) -> (Vec<Vec<f64>>, Vec<String>) {
    let mut vocabulary: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut term_counts: Vec<HashMap<String, f64>> = Vec::with_capacity(docs.len());

    for doc in docs {
        let mut tf: HashMap<String, f64> = HashMap::new();
        for token in tokenize(doc) {
            if seen.insert(token.clone()) {
                vocabulary.push(token.clone());
            }
            *tf.entry(token).or_insert(0.0) += 1.0;
        }
        term_counts.push(tf);
    }

    let vectors = term_counts
        .iter()
        .map(|tf| {
            vocabulary
                .iter()
                .map(|term| tf.get(term).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();

    (vectors, vocabulary)
}
