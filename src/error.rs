//! Error handling for the ingestion-and-retrieval pipeline

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Top-level error type unifying every failure kind the pipeline can surface
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("duplicate document")]
    DuplicateDocument,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("chunk error: {0}")]
    Chunk(String),

    #[error("embedding error: {0}")]
    Embedding(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("job interrupted")]
    Interrupted,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl PipelineError {
    /// Whether a local retry is worth attempting before failing the job,
    /// per the disposition table: `EmbeddingError` gets one retry,
    /// `StorageError` gets three with exponential backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PipelineError::Embedding(_) | PipelineError::Storage(_) | PipelineError::Database(_)
        )
    }

    /// Number of retry attempts local recovery should make, per §7.
    pub fn retry_budget(&self) -> u32 {
        match self {
            PipelineError::Embedding(_) => 1,
            PipelineError::Storage(_) | PipelineError::Database(_) => 3,
            _ => 0,
        }
    }

    /// Category label for structured logging / metrics.
    pub fn category(&self) -> &'static str {
        match self {
            PipelineError::Validation(_) => "validation",
            PipelineError::NotFound(_) => "not_found",
            PipelineError::DuplicateDocument => "duplicate_document",
            PipelineError::Parse(_) => "parse",
            PipelineError::Chunk(_) => "chunk",
            PipelineError::Embedding(_) => "embedding",
            PipelineError::Storage(_) => "storage",
            PipelineError::Interrupted => "interrupted",
            PipelineError::Config(_) => "config",
            PipelineError::Io(_) => "io",
            PipelineError::Serialization(_) => "serialization",
            PipelineError::Http(_) => "http",
            PipelineError::Database(_) => "database",
            PipelineError::Generic(_) => "generic",
        }
    }

    /// The `Job.error_message` value to persist for this failure.
    pub fn as_job_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let embedding_error = PipelineError::Embedding("timeout".into());
        assert!(embedding_error.is_retryable());
        assert_eq!(embedding_error.retry_budget(), 1);

        let storage_error = PipelineError::Storage("locked".into());
        assert!(storage_error.is_retryable());
        assert_eq!(storage_error.retry_budget(), 3);

        let dup = PipelineError::DuplicateDocument;
        assert!(!dup.is_retryable());
        assert_eq!(dup.retry_budget(), 0);
    }

    #[test]
    fn test_error_category() {
        assert_eq!(PipelineError::DuplicateDocument.category(), "duplicate_document");
        assert_eq!(PipelineError::NotFound("x".into()).category(), "not_found");
        assert_eq!(PipelineError::Interrupted.category(), "interrupted");
    }
}
