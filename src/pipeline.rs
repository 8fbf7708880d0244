//! Ingestion Pipeline (C4): Parse → Dedup → Chunk → Embed → Persist.
//!
//! Parsing and the checksum-based dedup check happen synchronously,
//! before any `Job` or `Document` row exists — the checksum is always
//! computed from canonical parsed text, for every source type including
//! URLs, closing the gap where the original implementation only
//! deduplicated uploads. Chunking, embedding and persistence then run as
//! a background stage tracked by a `Job` row, with progress checkpoints
//! at 10/30/50/80/100.

use crate::catalog::CatalogStore;
use crate::chunker::{Chunker, RawChunk};
use crate::config::{ChunkerConfig, JobConfig};
use crate::embedding::EmbeddingService;
use crate::error::{PipelineError, Result};
use crate::models::SourceType;
use crate::parser;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// Where a document's bytes come from.
pub enum IngestSource {
    Upload { bytes: Vec<u8>, source_type: SourceType },
    Url { url: String },
}

/// The outcome of parsing + deduplication, before any job exists.
pub struct ParsedDocument {
    pub text: String,
    pub checksum: String,
    pub title: Option<String>,
    pub source_type: SourceType,
    pub source_url: Option<String>,
}

/// Parses `source` into canonical text and computes its checksum.
/// Returns `Err(PipelineError::Parse)` on malformed input; does not
/// check for duplicates — callers do that against the catalog.
pub async fn parse_source(source: IngestSource, fetch_timeout_secs: u64) -> Result<ParsedDocument> {
    let (text, title, source_type, source_url) = match source {
        IngestSource::Upload { bytes, source_type } => {
            let text = match source_type {
                SourceType::Pdf => parser::parse_pdf(&bytes)?,
                SourceType::Markdown => parser::parse_markdown(&bytes)?,
                SourceType::Text => parser::parse_text(&bytes)?,
                SourceType::Url => {
                    return Err(PipelineError::Validation(
                        "uploaded files cannot declare source_type url".to_string(),
                    ))
                }
            };
            (text, None, source_type, None)
        }
        IngestSource::Url { url } => {
            let (text, title) = parser::parse_url(&url, fetch_timeout_secs).await?;
            (text, title, SourceType::Url, Some(url))
        }
    };

    if text.trim().is_empty() {
        return Err(PipelineError::Parse("parsed document has no text".to_string()));
    }

    let checksum = parser::checksum(&text);
    Ok(ParsedDocument {
        text,
        checksum,
        title,
        source_type,
        source_url,
    })
}

/// Runs the chunk → embed → persist stages for an already-created
/// document, reporting progress on `job_id` at each checkpoint. On any
/// failure, partially-persisted chunks for the document are rolled back
/// before the error propagates, so a document is never left with a
/// partial chunk set.
pub struct IngestionPipeline {
    catalog: Arc<CatalogStore>,
    embedding: Arc<dyn EmbeddingService>,
    chunker: Chunker,
}

impl IngestionPipeline {
    pub fn new(
        catalog: Arc<CatalogStore>,
        embedding: Arc<dyn EmbeddingService>,
        chunker_config: ChunkerConfig,
    ) -> Self {
        Self {
            catalog,
            embedding,
            chunker: Chunker::new(chunker_config),
        }
    }

    pub async fn run(
        &self,
        job_id: Uuid,
        document_id: Uuid,
        text: &str,
        source_type: SourceType,
    ) -> Result<()> {
        self.catalog.update_job_progress(job_id, 10).await?;

        let raw_chunks = if matches!(source_type, SourceType::Markdown) {
            self.chunker.chunk_markdown(text)
        } else {
            self.chunker.chunk_text(text)
        };

        if raw_chunks.is_empty() {
            return Err(PipelineError::Chunk(
                "chunking produced no chunks for a non-empty document".to_string(),
            ));
        }
        self.catalog.update_job_progress(job_id, 30).await?;

        let texts: Vec<String> = raw_chunks.iter().map(|c| c.text.clone()).collect();
        self.catalog.update_job_progress(job_id, 50).await?;

        let embed_result = self.embed_with_retry(&texts).await;
        let embeddings = match embed_result {
            Ok(embeddings) => embeddings,
            Err(e) => {
                warn!("embedding stage failed for document {document_id}: {e}");
                return Err(e);
            }
        };
        self.catalog.update_job_progress(job_id, 80).await?;

        if embeddings.len() != raw_chunks.len() {
            return Err(PipelineError::Embedding(format!(
                "embedding count {} does not match chunk count {}",
                embeddings.len(),
                raw_chunks.len()
            )));
        }

        let persist_result = self.persist_with_retry(document_id, &raw_chunks, &embeddings).await;
        match persist_result {
            Ok(_) => {
                self.catalog.update_job_progress(job_id, 100).await?;
                info!("ingestion complete for document {document_id}: {} chunks", raw_chunks.len());
                Ok(())
            }
            Err(e) => {
                // Atomicity: never leave a partial chunk set behind.
                if let Err(cleanup_err) = self.catalog.delete_chunks_for_document(document_id).await {
                    warn!("failed to roll back partial chunks for {document_id}: {cleanup_err}");
                }
                Err(e)
            }
        }
    }

    async fn embed_with_retry(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut attempt = 0;
        loop {
            match self.embedding.embed_documents(texts).await {
                Ok(embeddings) => return Ok(embeddings),
                Err(e) if e.is_retryable() && attempt < e.retry_budget() => {
                    attempt += 1;
                    warn!("embedding attempt {attempt} failed, retrying in 1s: {e}");
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn persist_with_retry(
        &self,
        document_id: Uuid,
        raw_chunks: &[RawChunk],
        embeddings: &[Vec<f32>],
    ) -> Result<Vec<crate::models::Chunk>> {
        let mut attempt = 0;
        loop {
            match self.catalog.insert_chunks(document_id, raw_chunks, embeddings).await {
                Ok(chunks) => return Ok(chunks),
                Err(e) if e.is_retryable() && attempt < e.retry_budget() => {
                    let backoff = Duration::from_secs(2u64.pow(attempt));
                    attempt += 1;
                    warn!(
                        "persist attempt {attempt} failed for document {document_id}, retrying in {:?}: {e}",
                        backoff
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Builds the metadata map a document row carries: currently just the
/// title, when one was recovered during parsing (e.g. an HTML `<title>`).
pub fn document_metadata(title: &Option<String>) -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    if let Some(title) = title {
        metadata.insert("source_title".to_string(), title.clone());
    }
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parse_upload_text() {
        let parsed = parse_source(
            IngestSource::Upload {
                bytes: b"hello world".to_vec(),
                source_type: SourceType::Text,
            },
            10,
        )
        .await
        .unwrap();
        assert_eq!(parsed.text, "hello world");
        assert_eq!(parsed.checksum, parser::checksum("hello world"));
    }

    #[tokio::test]
    async fn test_parse_rejects_empty_document() {
        let result = parse_source(
            IngestSource::Upload {
                bytes: b"   \n  ".to_vec(),
                source_type: SourceType::Text,
            },
            10,
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_parse_url_source_type_rejected_for_upload() {
        let result = parse_source(
            IngestSource::Upload {
                bytes: b"x".to_vec(),
                source_type: SourceType::Url,
            },
            10,
        )
        .await;
        assert!(result.is_err());
    }
}
