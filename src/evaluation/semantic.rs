use std::collections::{BTreeMap, BTreeSet};

use super::tokenize::vector_terms;
use super::{EvaluationStrategy, MetricValue, Metrics, percentage};

/// TF-IDF cosine similarity with the two answers as the whole corpus.
pub struct SemanticSimilarityStrategy;

impl EvaluationStrategy for SemanticSimilarityStrategy {
    fn name(&self) -> &'static str {
        "semantic"
    }

    fn evaluate(&self, first: &str, second: &str) -> Metrics {
        let similarity = tfidf_cosine(first, second);
        Metrics::new()
            .with("semantic_similarity", MetricValue::Number(similarity))
            .with("similarity_percentage", percentage(similarity))
    }
}

fn term_counts(text: &str) -> BTreeMap<String, f64> {
    let mut counts = BTreeMap::new();
    for term in vector_terms(text) {
        *counts.entry(term).or_insert(0.0) += 1.0;
    }
    counts
}

/// Smoothed idf, `ln((1 + n) / (1 + df)) + 1`, with L2-normalised rows.
/// A document without any term has a zero vector; its similarity is 0.
pub(crate) fn tfidf_cosine(first: &str, second: &str) -> f64 {
    let documents = [term_counts(first), term_counts(second)];
    let vocabulary = documents
        .iter()
        .flat_map(|counts| counts.keys())
        .collect::<BTreeSet<_>>();
    let corpus_size = documents.len() as f64;

    let vectors = documents
        .iter()
        .map(|counts| {
            vocabulary
                .iter()
                .map(|term| {
                    let tf = counts.get(*term).copied().unwrap_or(0.0);
                    let df = documents
                        .iter()
                        .filter(|doc| doc.contains_key(*term))
                        .count() as f64;
                    let idf = ((1.0 + corpus_size) / (1.0 + df)).ln() + 1.0;
                    tf * idf
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let norm = |vector: &[f64]| vector.iter().map(|value| value * value).sum::<f64>().sqrt();
    let first_norm = norm(&vectors[0]);
    let second_norm = norm(&vectors[1]);
    if first_norm == 0.0 || second_norm == 0.0 {
        return 0.0;
    }

    let dot = vectors[0]
        .iter()
        .zip(&vectors[1])
        .map(|(a, b)| a * b)
        .sum::<f64>();
    (dot / (first_norm * second_norm)).clamp(0.0, 1.0)
}
