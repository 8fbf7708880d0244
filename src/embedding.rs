//! Embedding Service (C3): turns chunk text into L2-normalized dense
//! vectors. Grounded on `llm.rs`'s `OllamaClient` — same request-timeout
//! wrapping and `api_url` helper — generalized to batching, a frozen
//! dimension, and the BGE query-instruction prefix.

use crate::config::EmbeddingConfig;
use crate::error::{PipelineError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::OnceCell;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// BGE-family models expect queries (not documents) prefixed with this
/// instruction. Matched by substring against the configured model name.
const BGE_QUERY_INSTRUCTION: &str =
    "Represent this sentence for searching relevant passages: ";

#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Embeds a batch of document texts, L2-normalized, in input order.
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embeds a single query, applying the BGE instruction prefix when
    /// the configured model is BGE-family.
    async fn embed_query(&self, query: &str) -> Result<Vec<f32>>;

    /// The frozen embedding dimension, discovered on first use.
    async fn dimension(&self) -> Result<usize>;
}

#[derive(Debug, Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct OllamaEmbedResponse {
    embedding: Vec<f32>,
}

/// Ollama-backed embedding service. Batches are sent as sequential
/// requests (Ollama's `/api/embeddings` is single-prompt); the
/// `batch_size` config caps how many run concurrently.
pub struct OllamaEmbeddingService {
    client: reqwest::Client,
    config: EmbeddingConfig,
    dimension: OnceCell<usize>,
}

impl OllamaEmbeddingService {
    pub fn new(config: EmbeddingConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build embedding HTTP client");
        Self {
            client,
            config,
            dimension: OnceCell::new(),
        }
    }

    fn api_url(&self) -> String {
        format!("{}/api/embeddings", self.config.ollama_url.trim_end_matches('/'))
    }

    fn is_bge_model(&self) -> bool {
        self.config.model.to_lowercase().contains("bge")
    }

    async fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        let request = OllamaEmbedRequest {
            model: &self.config.model,
            prompt: text,
        };

        let response = timeout(
            Duration::from_secs(self.config.timeout_secs),
            self.client.post(self.api_url()).json(&request).send(),
        )
        .await
        .map_err(|_| PipelineError::Embedding("request timed out".to_string()))??;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::Embedding(format!(
                "embedding backend returned an error: {body}"
            )));
        }

        let parsed: OllamaEmbedResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::Embedding(format!("invalid embedding response: {e}")))?;

        Ok(l2_normalize(parsed.embedding))
    }

    async fn ensure_dimension(&self, observed: usize) -> Result<()> {
        let frozen = self
            .dimension
            .get_or_try_init(|| async { Ok::<_, PipelineError>(observed) })
            .await?;
        if *frozen != observed {
            return Err(PipelineError::Embedding(format!(
                "embedding dimension mismatch: expected {frozen}, backend returned {observed}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl EmbeddingService for OllamaEmbeddingService {
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut out = Vec::with_capacity(texts.len());
        for batch in texts.chunks(self.config.batch_size.max(1)) {
            debug!("embedding batch of {} document(s)", batch.len());
            for text in batch {
                let vector = self.embed_one(text).await?;
                self.ensure_dimension(vector.len()).await?;
                out.push(vector);
            }
        }
        info!("embedded {} document(s)", out.len());
        Ok(out)
    }

    async fn embed_query(&self, query: &str) -> Result<Vec<f32>> {
        let prompt = if self.is_bge_model() {
            format!("{BGE_QUERY_INSTRUCTION}{query}")
        } else {
            query.to_string()
        };
        let vector = self.embed_one(&prompt).await?;
        self.ensure_dimension(vector.len()).await?;
        Ok(vector)
    }

    async fn dimension(&self) -> Result<usize> {
        match self.dimension.get() {
            Some(d) => Ok(*d),
            None => {
                warn!("embedding dimension requested before any vector was produced");
                let probe = self.embed_one("dimension probe").await?;
                let d = probe.len();
                self.ensure_dimension(d).await?;
                Ok(d)
            }
        }
    }
}

/// Normalizes a vector to unit L2 norm; returns it unchanged if the norm
/// is zero (all-zero embedding, degenerate but not an error).
pub fn l2_normalize(mut v: Vec<f32>) -> Vec<f32> {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_normalize() {
        let v = l2_normalize(vec![3.0, 4.0]);
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_l2_normalize_zero_vector() {
        let v = l2_normalize(vec![0.0, 0.0]);
        assert_eq!(v, vec![0.0, 0.0]);
    }

    #[test]
    fn test_bge_prefix_detection() {
        let mut config = EmbeddingConfig::default();
        config.model = "bge-small-en-v1.5".to_string();
        let service = OllamaEmbeddingService::new(config);
        assert!(service.is_bge_model());

        let mut config = EmbeddingConfig::default();
        config.model = "nomic-embed-text".to_string();
        let service = OllamaEmbeddingService::new(config);
        assert!(!service.is_bge_model());
    }

    #[test]
    fn test_api_url() {
        let config = EmbeddingConfig::default();
        let service = OllamaEmbeddingService::new(config);
        assert_eq!(service.api_url(), "http://localhost:11434/api/embeddings");
    }
}
