//! Similarity ranking of candidate corps against a query.
//!
//! Scores candidate names with tf-idf vectors over a vocabulary built
//! from the query and the candidates of a single call, then orders by
//! cosine similarity to the query. The vocabulary is query-local; nothing
//! is precomputed or shared across calls.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::db::Corp;

/// Tokenize for the vector space: lowercase, split on non-alphanumeric,
/// keep tokens of at least two characters.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// Cosine similarity of the query against each candidate name.
///
/// Term weights are `tf * idf` with smoothed idf `ln((1+n)/(1+df)) + 1`
/// over the call's own corpus (query first, then candidates). Returns
/// `None` when no input yields a usable token or the query itself does
/// not: a degenerate vocabulary cannot order anything.
pub(crate) fn tfidf_cosine_scores(query: &str, names: &[&str]) -> Option<Vec<f64>> {
    let docs: Vec<Vec<String>> = std::iter::once(query)
        .chain(names.iter().copied())
        .map(tokenize)
        .collect();

    let mut vocab: HashMap<&str, usize> = HashMap::new();
    for doc in &docs {
        for token in doc {
            let next = vocab.len();
            vocab.entry(token.as_str()).or_insert(next);
        }
    }
    if vocab.is_empty() {
        return None;
    }

    let mut df = vec![0usize; vocab.len()];
    for doc in &docs {
        let mut seen = vec![false; vocab.len()];
        for token in doc {
            let term = vocab[token.as_str()];
            if !seen[term] {
                seen[term] = true;
                df[term] += 1;
            }
        }
    }

    let n = docs.len() as f64;
    let idf: Vec<f64> = df
        .iter()
        .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
        .collect();

    let vectors: Vec<Vec<f64>> = docs
        .iter()
        .map(|doc| {
            let mut weights = vec![0.0f64; vocab.len()];
            for token in doc {
                weights[vocab[token.as_str()]] += 1.0;
            }
            for (term, weight) in weights.iter_mut().enumerate() {
                *weight *= idf[term];
            }
            weights
        })
        .collect();

    let query_vec = &vectors[0];
    let query_norm = norm(query_vec);
    if query_norm == 0.0 {
        return None;
    }

    Some(
        vectors[1..]
            .iter()
            .map(|candidate| {
                let denom = query_norm * norm(candidate);
                if denom == 0.0 {
                    0.0
                } else {
                    dot(query_vec, candidate) / denom
                }
            })
            .collect(),
    )
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Orders candidates best-match-first and truncates to `k`.
///
/// Ties keep retrieval order (stable sort). When scoring is impossible
/// (degenerate vocabulary) the candidates come back in retrieval order
/// instead; ranking degrades, it never fails.
pub fn rank_top_k(query: &str, mut candidates: Vec<Corp>, k: usize) -> Vec<Corp> {
    if candidates.is_empty() {
        return candidates;
    }

    let scores = {
        let names: Vec<&str> = candidates.iter().map(|c| c.corp_name.as_str()).collect();
        tfidf_cosine_scores(query, &names)
    };

    match scores {
        Some(scores) => {
            let mut scored: Vec<(f64, Corp)> = scores.into_iter().zip(candidates).collect();
            scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
            scored.truncate(k);
            scored.into_iter().map(|(_, corp)| corp).collect()
        }
        None => {
            tracing::warn!(
                "degenerate vocabulary for query {:?}; falling back to retrieval order",
                query
            );
            candidates.truncate(k);
            candidates
        }
    }
}
