//! Lexical Index (C6): hand-rolled BM25-Okapi scoring over a collection's
//! chunks. No single BM25 crate dominates the ecosystem the rest of this
//! stack draws from, so this follows the same first-party-module pattern
//! seen across the example corpus rather than adding a dependency for it.

use std::collections::HashMap;
use uuid::Uuid;

const K1: f32 = 1.5;
const B: f32 = 0.75;

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

struct Doc {
    id: Uuid,
    term_counts: HashMap<String, u32>,
    length: usize,
}

/// An ephemeral, per-query BM25 index built from a collection's current
/// chunk set. Rebuilt on every query rather than cached, matching the
/// original's unconditional rebuild-per-question behavior.
pub struct BM25Index {
    docs: Vec<Doc>,
    doc_freq: HashMap<String, u32>,
    avg_doc_len: f32,
}

impl BM25Index {
    /// Builds the index from `(chunk_id, text)` pairs.
    pub fn build(chunks: &[(Uuid, &str)]) -> Self {
        let mut docs = Vec::with_capacity(chunks.len());
        let mut doc_freq: HashMap<String, u32> = HashMap::new();
        let mut total_len = 0usize;

        for (id, text) in chunks {
            let tokens = tokenize(text);
            total_len += tokens.len();
            let mut term_counts: HashMap<String, u32> = HashMap::new();
            for token in &tokens {
                *term_counts.entry(token.clone()).or_insert(0) += 1;
            }
            for term in term_counts.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            docs.push(Doc {
                id: *id,
                term_counts,
                length: tokens.len(),
            });
        }

        let avg_doc_len = if docs.is_empty() {
            0.0
        } else {
            total_len as f32 / docs.len() as f32
        };

        Self {
            docs,
            doc_freq,
            avg_doc_len,
        }
    }

    fn idf(&self, term: &str) -> f32 {
        let n = self.docs.len() as f32;
        let df = *self.doc_freq.get(term).unwrap_or(&0) as f32;
        // BM25's probabilistic idf, floored at a small positive value so
        // ubiquitous terms never push a score negative.
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln().max(1e-6)
    }

    fn score(&self, doc: &Doc, query_terms: &[String]) -> f32 {
        query_terms
            .iter()
            .map(|term| {
                let tf = *doc.term_counts.get(term).unwrap_or(&0) as f32;
                if tf == 0.0 {
                    return 0.0;
                }
                let idf = self.idf(term);
                let denom = tf + K1 * (1.0 - B + B * (doc.length as f32 / self.avg_doc_len.max(1.0)));
                idf * (tf * (K1 + 1.0)) / denom
            })
            .sum()
    }

    /// Returns up to `top_k` `(chunk_id, score)` pairs for `query`, sorted
    /// by descending score with ties broken by ascending chunk id. Chunks
    /// that score exactly zero (no overlapping term) are dropped.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<(Uuid, f32)> {
        let query_terms = tokenize(query);
        if query_terms.is_empty() || self.docs.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(Uuid, f32)> = self
            .docs
            .iter()
            .map(|doc| (doc.id, self.score(doc, &query_terms)))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        scored.sort_by(|a, b| match b.1.partial_cmp(&a.1) {
            Some(std::cmp::Ordering::Equal) | None => a.0.cmp(&b.0),
            Some(ord) => ord,
        });
        scored.truncate(top_k);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index_yields_no_results() {
        let index = BM25Index::build(&[]);
        assert!(index.search("anything", 10).is_empty());
    }

    #[test]
    fn test_no_alphanumeric_query_yields_no_results() {
        let a = Uuid::new_v4();
        let index = BM25Index::build(&[(a, "the quick brown fox")]);
        assert!(index.search("!!!", 10).is_empty());
    }

    #[test]
    fn test_exact_term_match_ranks_higher() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let index = BM25Index::build(&[
            (a, "rust ownership and borrowing rules"),
            (b, "python dynamic typing and duck typing"),
        ]);
        let results = index.search("ownership borrowing", 10);
        assert_eq!(results[0].0, a);
        assert!(results.len() == 1 || results[0].1 > results[1].1);
    }

    #[test]
    fn test_zero_score_docs_are_dropped() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let index = BM25Index::build(&[(a, "alpha beta"), (b, "gamma delta")]);
        let results = index.search("alpha", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, a);
    }

    #[test]
    fn test_tie_broken_by_ascending_id() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let index = BM25Index::build(&[(high, "shared term"), (low, "shared term")]);
        let results = index.search("shared term", 10);
        assert_eq!(results[0].0, low);
        assert_eq!(results[1].0, high);
    }
}
