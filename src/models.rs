//! Data model (§3): the catalog store's entity types

use crate::chunker::ChunkMeta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A named bag of documents; retrieval is always scoped to exactly one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// How a document's text was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Pdf,
    Url,
    Markdown,
    Text,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Pdf => "pdf",
            SourceType::Url => "url",
            SourceType::Markdown => "markdown",
            SourceType::Text => "text",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pdf" => Some(SourceType::Pdf),
            "url" => Some(SourceType::Url),
            "markdown" => Some(SourceType::Markdown),
            "text" => Some(SourceType::Text),
            _ => None,
        }
    }
}

/// Belongs to one collection. Exists before its chunks; chunks may be
/// absent for a brief window while a job is processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub title: String,
    pub source_type: SourceType,
    pub source_url: Option<String>,
    /// SHA-256 hex of canonical parsed text; empty until known
    pub checksum: String,
    pub metadata: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
}

/// A contiguous, token-bounded slice of a document's text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: Uuid,
    pub document_id: Uuid,
    pub text: String,
    pub token_count: usize,
    pub chunk_index: usize,
    pub start_char: usize,
    pub end_char: usize,
    pub embedding: Vec<f32>,
    pub meta: ChunkMeta,
}

/// Lifecycle status of an ingestion job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(JobStatus::Pending),
            "processing" => Some(JobStatus::Processing),
            "completed" => Some(JobStatus::Completed),
            "failed" => Some(JobStatus::Failed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// Durable record tracking the lifecycle of a single ingestion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub document_id: Uuid,
    pub status: JobStatus,
    pub progress: u8,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// A recorded question with its generated answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub question: String,
    pub answer: String,
    pub citations: Vec<Citation>,
    pub latency_ms: i64,
    pub llm_model: String,
    pub retrieval_score: f32,
    pub created_at: DateTime<Utc>,
}

/// One citation materialized from an answer's bracketed reference markers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    pub index: usize,
    pub text_preview: String,
    pub document_id: Uuid,
    pub chunk_index: usize,
}

/// Records which chunks grounded a given answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryChunk {
    pub query_id: Uuid,
    pub chunk_id: Uuid,
    pub rank: u32,
    pub score: f32,
}

/// At most one per Query; upsert semantics keyed by `query_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub query_id: Uuid,
    pub value: i32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}
