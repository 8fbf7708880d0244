//! Hybrid Retriever (C7): fuses dense-vector and BM25 rankings via
//! weighted Reciprocal Rank Fusion. The vector channel contributes to all
//! of its own top-2k candidates; the lexical channel is scored over the
//! full collection (so IDF and average length reflect the whole corpus)
//! but only contributes for candidates already surfaced by the vector
//! channel, checked through a `HashSet` rather than a linear scan.

use crate::catalog::CatalogStore;
use crate::config::RetrievalConfig;
use crate::embedding::EmbeddingService;
use crate::error::Result;
use crate::lexical::BM25Index;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

/// One fused, ranked retrieval result.
#[derive(Debug, Clone)]
pub struct RetrievedChunk {
    pub chunk_id: Uuid,
    pub score: f32,
}

pub struct HybridRetriever {
    catalog: Arc<CatalogStore>,
    embedding: Arc<dyn EmbeddingService>,
    config: RetrievalConfig,
}

impl HybridRetriever {
    pub fn new(
        catalog: Arc<CatalogStore>,
        embedding: Arc<dyn EmbeddingService>,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            catalog,
            embedding,
            config,
        }
    }

    /// Vector-only search: the dense channel alone, useful when a caller
    /// explicitly opts out of hybrid retrieval.
    pub async fn search_vector_only(
        &self,
        collection_id: Uuid,
        question: &str,
        top_k: usize,
    ) -> Result<Vec<RetrievedChunk>> {
        let query_vector = self.embedding.embed_query(question).await?;
        let nearest = self
            .catalog
            .nearest_chunks(collection_id, &query_vector, top_k)
            .await?;
        Ok(nearest
            .into_iter()
            .map(|(chunk_id, score)| RetrievedChunk { chunk_id, score })
            .collect())
    }

    /// Hybrid search: fuses the vector and BM25 channels via RRF and
    /// returns the top `top_k` fused results.
    pub async fn search_hybrid(
        &self,
        collection_id: Uuid,
        question: &str,
        top_k: usize,
    ) -> Result<Vec<RetrievedChunk>> {
        let chunks = self.catalog.list_chunks_for_collection(collection_id).await?;
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        let query_vector = self.embedding.embed_query(question).await?;
        let candidate_pool = (top_k * 2).max(top_k);

        let vector_ranked = self
            .catalog
            .nearest_chunks(collection_id, &query_vector, candidate_pool)
            .await?;

        // The index is built over the full collection so IDF and average
        // document length reflect the whole corpus, not just the vector
        // channel's candidates. `B`'s own rank positions are preserved as
        // returned; `reciprocal_rank_fusion` gates which of them actually
        // contribute, via O(1) `HashSet` membership against `ids(V)`.
        let bm25_pairs: Vec<(Uuid, &str)> = chunks.iter().map(|c| (c.id, c.text.as_str())).collect();
        let bm25_index = BM25Index::build(&bm25_pairs);
        let lexical_ranked = bm25_index.search(question, candidate_pool);

        let fused = reciprocal_rank_fusion(
            &vector_ranked,
            &lexical_ranked,
            self.config.k_rrf,
            self.config.vector_weight,
        );

        Ok(fused
            .into_iter()
            .take(top_k)
            .map(|(chunk_id, score)| RetrievedChunk { chunk_id, score })
            .collect())
    }
}

/// Weighted Reciprocal Rank Fusion: `score(d) = vector_weight / (k + rank(d))`
/// for the vector channel plus `(1 - vector_weight) / (k + rank(d))` for the
/// lexical channel, rank 1-based. BM25 serves as a re-ranker over vector
/// candidates, not an independent recall channel: a lexical hit only
/// contributes if its id also appears in the vector channel, but its rank
/// is still its position in `lexical_ranked` as given — entries absent from
/// the vector channel are skipped, not renumbered out of the list. A
/// document absent from a channel contributes 0 from it. Output is sorted
/// descending by fused score, ties broken by ascending chunk id.
pub fn reciprocal_rank_fusion(
    vector_ranked: &[(Uuid, f32)],
    lexical_ranked: &[(Uuid, f32)],
    k_rrf: u32,
    vector_weight: f32,
) -> Vec<(Uuid, f32)> {
    let mut fused: HashMap<Uuid, f32> = HashMap::new();
    let vector_ids: HashSet<Uuid> = vector_ranked.iter().map(|(id, _)| id).copied().collect();

    for (rank, (id, _)) in vector_ranked.iter().enumerate() {
        *fused.entry(*id).or_insert(0.0) += vector_weight / (k_rrf as f32 + (rank + 1) as f32);
    }
    for (rank, (id, _)) in lexical_ranked.iter().enumerate() {
        if !vector_ids.contains(id) {
            continue;
        }
        *fused.entry(*id).or_insert(0.0) += (1.0 - vector_weight) / (k_rrf as f32 + (rank + 1) as f32);
    }

    let mut result: Vec<(Uuid, f32)> = fused.into_iter().collect();
    result.sort_by(|a, b| match b.1.partial_cmp(&a.1) {
        Some(std::cmp::Ordering::Equal) | None => a.0.cmp(&b.0),
        Some(ord) => ord,
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rrf_lexical_only_candidates_are_excluded() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let vector_ranked = vec![(a, 0.9), (b, 0.8)];
        // c is lexical-only (never surfaced by the vector channel) and must
        // not enter the fused result at all, per the "BM25 re-ranks vector
        // candidates, not an independent recall channel" rule.
        let lexical_ranked = vec![(b, 5.0), (c, 4.0)];
        let fused = reciprocal_rank_fusion(&vector_ranked, &lexical_ranked, 60, 0.7);
        // b appears in both channels so it should outrank a lone-channel hit
        assert_eq!(fused[0].0, b);
        assert_eq!(fused.len(), 2);
        assert!(fused.iter().all(|(id, _)| *id != c));
    }

    #[test]
    fn test_rrf_single_channel_only() {
        let a = Uuid::new_v4();
        let vector_ranked = vec![(a, 0.9)];
        let fused = reciprocal_rank_fusion(&vector_ranked, &[], 60, 0.7);
        assert_eq!(fused.len(), 1);
        assert_eq!(fused[0].0, a);
    }

    #[test]
    fn test_rrf_tie_broken_by_ascending_id() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let vector_ranked = vec![(low, 1.0), (high, 1.0)];
        let fused = reciprocal_rank_fusion(&vector_ranked, &[], 60, 0.7);
        // both at rank-equivalent positions but low has the earlier rank
        // here since it appears first in vector_ranked
        assert_eq!(fused[0].0, low);
    }

    #[test]
    fn test_rrf_applies_vector_weight() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        // a ranks first in the vector channel, b ranks first lexically.
        // With a vector_weight above 0.5, a's contribution should win.
        let vector_ranked = vec![(a, 0.9), (b, 0.8)];
        let lexical_ranked = vec![(b, 5.0), (a, 4.0)];
        let fused = reciprocal_rank_fusion(&vector_ranked, &lexical_ranked, 60, 0.7);
        assert_eq!(fused[0].0, a);
    }
}
