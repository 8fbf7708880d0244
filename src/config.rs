//! Configuration management for the ingestion-and-retrieval pipeline

use serde::{Deserialize, Serialize};

/// Top-level configuration for the pipeline and its HTTP shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog store configuration
    pub storage: StorageConfig,

    /// Chunker configuration
    #[serde(default)]
    pub chunker: ChunkerConfig,

    /// Embedding service configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Hybrid retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Job manager configuration
    #[serde(default)]
    pub jobs: JobConfig,

    /// LLM answer-generation configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// HTTP shell configuration
    #[serde(default)]
    pub http: HttpConfig,
}

/// Catalog store (C1) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite database URL, e.g. `sqlite://docusense.db` or `sqlite::memory:`
    pub database_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://docusense.db".to_string(),
        }
    }
}

/// Chunker (C2) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Maximum tokens per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Token overlap seeded into the next chunk
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

fn default_chunk_size() -> usize {
    800
}

fn default_chunk_overlap() -> usize {
    200
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

/// Embedding service (C3) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Ollama server URL
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,

    /// Embedding model name, used both for the backend call and the
    /// BGE-family query-instruction-prefix heuristic
    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// Document batch size
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Request timeout in seconds
    #[serde(default = "default_embedding_timeout")]
    pub timeout_secs: u64,
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_embedding_model() -> String {
    "bge-small-en-v1.5".to_string()
}

fn default_batch_size() -> usize {
    32
}

fn default_embedding_timeout() -> u64 {
    60
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            ollama_url: default_ollama_url(),
            model: default_embedding_model(),
            batch_size: default_batch_size(),
            timeout_secs: default_embedding_timeout(),
        }
    }
}

/// Hybrid retriever (C7) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Default number of chunks to return
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Weight given to the dense-vector channel in RRF fusion
    #[serde(default = "default_vector_weight")]
    pub vector_weight: f32,

    /// RRF smoothing constant
    #[serde(default = "default_k_rrf")]
    pub k_rrf: u32,

    /// Confidence threshold below which `/api/ask` short-circuits with a
    /// fixed "insufficient information" answer
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,
}

fn default_top_k() -> usize {
    10
}

fn default_vector_weight() -> f32 {
    0.7
}

fn default_k_rrf() -> u32 {
    60
}

fn default_confidence_threshold() -> f32 {
    0.05
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            vector_weight: default_vector_weight(),
            k_rrf: default_k_rrf(),
            confidence_threshold: default_confidence_threshold(),
        }
    }
}

/// Job manager (C5) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Number of worker tasks processing the ingestion queue
    #[serde(default = "default_worker_pool_size")]
    pub worker_pool_size: usize,

    /// Bound on the submission channel
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Soft per-stage timeout for URL fetches, in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Soft timeout for a single embedding batch call, in seconds
    #[serde(default = "default_embed_stage_timeout")]
    pub embed_stage_timeout_secs: u64,

    /// Soft overall job timeout, in seconds
    #[serde(default = "default_job_timeout")]
    pub job_timeout_secs: u64,
}

fn default_worker_pool_size() -> usize {
    num_cpus::get()
}

fn default_queue_capacity() -> usize {
    256
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_embed_stage_timeout() -> u64 {
    60
}

fn default_job_timeout() -> u64 {
    600
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            worker_pool_size: default_worker_pool_size(),
            queue_capacity: default_queue_capacity(),
            fetch_timeout_secs: default_fetch_timeout(),
            embed_stage_timeout_secs: default_embed_stage_timeout(),
            job_timeout_secs: default_job_timeout(),
        }
    }
}

/// LLM answer-generation (C9) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama server URL
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,

    /// Default chat/generation model
    #[serde(default = "default_llm_model")]
    pub default_model: String,

    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,

    /// Maximum tokens requested per generation
    #[serde(default = "default_llm_max_tokens")]
    pub max_tokens: u32,
}

fn default_llm_model() -> String {
    "mistral".to_string()
}

fn default_llm_timeout() -> u64 {
    30
}

fn default_llm_max_tokens() -> u32 {
    500
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            ollama_url: default_ollama_url(),
            default_model: default_llm_model(),
            timeout_secs: default_llm_timeout(),
            max_tokens: default_llm_max_tokens(),
        }
    }
}

/// HTTP shell (C10) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Bind address, e.g. `0.0.0.0:8000`
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            chunker: ChunkerConfig::default(),
            embedding: EmbeddingConfig::default(),
            retrieval: RetrievalConfig::default(),
            jobs: JobConfig::default(),
            llm: LlmConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file; format is sniffed from the extension
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config = match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yml::from_str(&content)?,
            _ => return Err(anyhow::anyhow!("unsupported config file format")),
        };
        Ok(config)
    }

    /// Save configuration to a file; format is sniffed from the extension
    pub fn to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string(self)?,
            Some("yaml") | Some("yml") => serde_yml::to_string(self)?,
            _ => return Err(anyhow::anyhow!("unsupported config file format")),
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration, erroring on anything that would make the
    /// pipeline behave incoherently at runtime
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.storage.database_url.is_empty() {
            return Err(anyhow::anyhow!("database_url cannot be empty"));
        }

        if !self.embedding.ollama_url.starts_with("http") {
            return Err(anyhow::anyhow!(
                "invalid embedding ollama_url: {}",
                self.embedding.ollama_url
            ));
        }

        if self.embedding.model.is_empty() {
            return Err(anyhow::anyhow!("embedding model name cannot be empty"));
        }

        if self.embedding.batch_size == 0 {
            return Err(anyhow::anyhow!("embedding batch_size must be greater than 0"));
        }

        if self.chunker.chunk_size == 0 {
            return Err(anyhow::anyhow!("chunk_size must be greater than 0"));
        }

        if self.chunker.chunk_overlap >= self.chunker.chunk_size {
            return Err(anyhow::anyhow!(
                "chunk_overlap must be smaller than chunk_size"
            ));
        }

        if !(0.0..=1.0).contains(&self.retrieval.vector_weight) {
            return Err(anyhow::anyhow!("vector_weight must be between 0.0 and 1.0"));
        }

        if self.retrieval.top_k == 0 {
            return Err(anyhow::anyhow!("top_k must be greater than 0"));
        }

        if self.jobs.worker_pool_size == 0 {
            return Err(anyhow::anyhow!("worker_pool_size must be greater than 0"));
        }

        if !self.llm.ollama_url.starts_with("http") {
            return Err(anyhow::anyhow!("invalid llm ollama_url: {}", self.llm.ollama_url));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunker.chunk_size, 800);
        assert_eq!(config.chunker.chunk_overlap, 200);
        assert_eq!(config.retrieval.vector_weight, 0.7);
        assert_eq!(config.retrieval.k_rrf, 60);
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        config.embedding.ollama_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.chunker.chunk_overlap = config.chunker.chunk_size;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.retrieval.vector_weight = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_roundtrip_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = AppConfig::default();
        config.to_file(&path).unwrap();
        let loaded = AppConfig::from_file(&path).unwrap();
        assert_eq!(loaded.chunker.chunk_size, config.chunker.chunk_size);
    }
}
