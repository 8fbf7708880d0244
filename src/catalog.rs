//! Catalog Store (C1): the durable record of collections, documents,
//! chunks, jobs, queries and feedback — the only durable state in the
//! system. Grounded on `memory.rs`'s `SqliteMemoryStore`: a `sqlx`
//! SQLite pool, raw little-endian f32 blobs for embeddings, and a
//! brute-force cosine-similarity scan for nearest-neighbor search.

use crate::chunker::{ChunkMeta, RawChunk};
use crate::config::StorageConfig;
use crate::error::{PipelineError, Result};
use crate::models::{
    Chunk, Citation, Collection, Document, Feedback, Job, JobStatus, Query, QueryChunk, SourceType,
};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqlitePool, Row};
use std::collections::HashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// SQLite-backed implementation of the catalog store
pub struct CatalogStore {
    pool: Option<SqlitePool>,
    config: StorageConfig,
}

impl CatalogStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { pool: None, config }
    }

    fn pool(&self) -> Result<&SqlitePool> {
        self.pool
            .as_ref()
            .ok_or_else(|| PipelineError::Storage("catalog store not initialized".to_string()))
    }

    /// Create the connection pool and schema if absent.
    pub async fn initialize(&mut self) -> Result<()> {
        info!("initializing catalog store at {}", self.config.database_url);

        if let Some(db_path) = self.config.database_url.strip_prefix("sqlite:") {
            let db_path = db_path.split('?').next().unwrap_or(db_path);
            if db_path != ":memory:" && !db_path.is_empty() {
                if let Some(parent) = std::path::Path::new(db_path).parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
            }
        }

        let database_url = if self.config.database_url.contains(":memory:") {
            self.config.database_url.clone()
        } else if self.config.database_url.contains('?') {
            self.config.database_url.clone()
        } else {
            format!("{}?mode=rwc", self.config.database_url)
        };

        let pool = SqlitePool::connect(&database_url).await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS collections (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                collection_id TEXT NOT NULL,
                title TEXT NOT NULL,
                source_type TEXT NOT NULL,
                source_url TEXT,
                checksum TEXT NOT NULL DEFAULT '',
                metadata TEXT NOT NULL DEFAULT '{}',
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_checksum ON documents(checksum)")
            .execute(&pool)
            .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection_id)",
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS chunks (
                id TEXT PRIMARY KEY,
                document_id TEXT NOT NULL,
                text TEXT NOT NULL,
                token_count INTEGER NOT NULL,
                chunk_index INTEGER NOT NULL,
                start_char INTEGER NOT NULL,
                end_char INTEGER NOT NULL,
                embedding BLOB NOT NULL,
                meta TEXT NOT NULL DEFAULT '{}'
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_chunks_document ON chunks(document_id)")
            .execute(&pool)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS jobs (
                id TEXT PRIMARY KEY,
                collection_id TEXT NOT NULL,
                document_id TEXT NOT NULL,
                status TEXT NOT NULL,
                progress INTEGER NOT NULL DEFAULT 0,
                error_message TEXT,
                created_at TEXT NOT NULL,
                completed_at TEXT
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS queries (
                id TEXT PRIMARY KEY,
                collection_id TEXT NOT NULL,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                citations TEXT NOT NULL DEFAULT '[]',
                latency_ms INTEGER NOT NULL,
                llm_model TEXT NOT NULL,
                retrieval_score REAL NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS query_chunks (
                query_id TEXT NOT NULL,
                chunk_id TEXT NOT NULL,
                rank INTEGER NOT NULL,
                score REAL NOT NULL,
                PRIMARY KEY (query_id, chunk_id)
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS feedback (
                id TEXT PRIMARY KEY,
                query_id TEXT NOT NULL UNIQUE,
                value INTEGER NOT NULL,
                note TEXT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        self.pool = Some(pool);
        info!("catalog store schema ready");
        Ok(())
    }

    // ---- embedding (de)serialization, same raw-LE-f32-blob scheme as memory.rs ----

    pub fn serialize_embedding(embedding: &[f32]) -> Vec<u8> {
        embedding.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    pub fn deserialize_embedding(data: &[u8]) -> Vec<f32> {
        data.chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    /// `1 - cosine_distance`; equivalent to inner product for L2-normalized
    /// vectors.
    pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() {
            return 0.0;
        }
        let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a * norm_b)
    }

    // ---- collections ----

    pub async fn create_collection(&self, name: &str, description: &str) -> Result<Collection> {
        let pool = self.pool()?;
        if self.find_collection_by_name(name).await?.is_some() {
            return Err(PipelineError::Validation(format!(
                "collection name '{name}' already exists"
            )));
        }
        let collection = Collection {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
        };
        sqlx::query(
            "INSERT INTO collections (id, name, description, created_at) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(collection.id.to_string())
        .bind(&collection.name)
        .bind(&collection.description)
        .bind(collection.created_at.to_rfc3339())
        .execute(pool)
        .await?;
        Ok(collection)
    }

    pub async fn find_collection_by_name(&self, name: &str) -> Result<Option<Collection>> {
        let pool = self.pool()?;
        let row = sqlx::query("SELECT * FROM collections WHERE name = ?1")
            .bind(name)
            .fetch_optional(pool)
            .await?;
        row.map(Self::row_to_collection).transpose()
    }

    pub async fn get_collection(&self, id: Uuid) -> Result<Option<Collection>> {
        let pool = self.pool()?;
        let row = sqlx::query("SELECT * FROM collections WHERE id = ?1")
            .bind(id.to_string())
            .fetch_optional(pool)
            .await?;
        row.map(Self::row_to_collection).transpose()
    }

    pub async fn list_collections(&self) -> Result<Vec<Collection>> {
        let pool = self.pool()?;
        let rows = sqlx::query("SELECT * FROM collections ORDER BY created_at ASC")
            .fetch_all(pool)
            .await?;
        rows.into_iter().map(Self::row_to_collection).collect()
    }

    pub async fn count_documents(&self, collection_id: Uuid) -> Result<usize> {
        let pool = self.pool()?;
        let row = sqlx::query("SELECT COUNT(*) as n FROM documents WHERE collection_id = ?1")
            .bind(collection_id.to_string())
            .fetch_one(pool)
            .await?;
        let n: i64 = row.get("n");
        Ok(n as usize)
    }

    fn row_to_collection(row: sqlx::sqlite::SqliteRow) -> Result<Collection> {
        let id: String = row.get("id");
        let created_at: String = row.get("created_at");
        Ok(Collection {
            id: Uuid::parse_str(&id).map_err(|e| PipelineError::Storage(e.to_string()))?,
            name: row.get("name"),
            description: row.get("description"),
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| PipelineError::Storage(e.to_string()))?
                .with_timezone(&Utc),
        })
    }

    // ---- documents ----

    #[allow(clippy::too_many_arguments)]
    pub async fn create_document(
        &self,
        collection_id: Uuid,
        title: &str,
        source_type: SourceType,
        source_url: Option<&str>,
        checksum: &str,
        metadata: HashMap<String, String>,
    ) -> Result<Document> {
        let pool = self.pool()?;
        let document = Document {
            id: Uuid::new_v4(),
            collection_id,
            title: title.to_string(),
            source_type,
            source_url: source_url.map(|s| s.to_string()),
            checksum: checksum.to_string(),
            metadata,
            created_at: Utc::now(),
        };
        sqlx::query(
            r#"
            INSERT INTO documents
                (id, collection_id, title, source_type, source_url, checksum, metadata, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(document.id.to_string())
        .bind(document.collection_id.to_string())
        .bind(&document.title)
        .bind(document.source_type.as_str())
        .bind(&document.source_url)
        .bind(&document.checksum)
        .bind(serde_json::to_string(&document.metadata)?)
        .bind(document.created_at.to_rfc3339())
        .execute(pool)
        .await?;
        Ok(document)
    }

    pub async fn find_document_by_checksum(&self, checksum: &str) -> Result<Option<Document>> {
        if checksum.is_empty() {
            return Ok(None);
        }
        let pool = self.pool()?;
        let row = sqlx::query("SELECT * FROM documents WHERE checksum = ?1")
            .bind(checksum)
            .fetch_optional(pool)
            .await?;
        row.map(Self::row_to_document).transpose()
    }

    pub async fn get_document(&self, id: Uuid) -> Result<Option<Document>> {
        let pool = self.pool()?;
        let row = sqlx::query("SELECT * FROM documents WHERE id = ?1")
            .bind(id.to_string())
            .fetch_optional(pool)
            .await?;
        row.map(Self::row_to_document).transpose()
    }

    fn row_to_document(row: sqlx::sqlite::SqliteRow) -> Result<Document> {
        let id: String = row.get("id");
        let collection_id: String = row.get("collection_id");
        let source_type: String = row.get("source_type");
        let metadata_json: String = row.get("metadata");
        let created_at: String = row.get("created_at");
        Ok(Document {
            id: Uuid::parse_str(&id).map_err(|e| PipelineError::Storage(e.to_string()))?,
            collection_id: Uuid::parse_str(&collection_id)
                .map_err(|e| PipelineError::Storage(e.to_string()))?,
            title: row.get("title"),
            source_type: SourceType::parse(&source_type)
                .ok_or_else(|| PipelineError::Storage(format!("bad source_type {source_type}")))?,
            source_url: row.get("source_url"),
            checksum: row.get("checksum"),
            metadata: serde_json::from_str(&metadata_json).unwrap_or_default(),
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| PipelineError::Storage(e.to_string()))?
                .with_timezone(&Utc),
        })
    }

    // ---- chunks ----

    /// Deletes any chunks already inserted for a document. Used by the
    /// ingestion pipeline's atomicity rule: on failure after chunks begin
    /// persisting, they are removed before the job is marked `failed`.
    pub async fn delete_chunks_for_document(&self, document_id: Uuid) -> Result<()> {
        let pool = self.pool()?;
        sqlx::query("DELETE FROM chunks WHERE document_id = ?1")
            .bind(document_id.to_string())
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Persists all chunks for a document as a single transaction: either
    /// every chunk lands, or none do.
    pub async fn insert_chunks(
        &self,
        document_id: Uuid,
        raw_chunks: &[RawChunk],
        embeddings: &[Vec<f32>],
    ) -> Result<Vec<Chunk>> {
        let pool = self.pool()?;
        let mut tx = pool.begin().await?;
        let mut chunks = Vec::with_capacity(raw_chunks.len());

        for (raw, embedding) in raw_chunks.iter().zip(embeddings.iter()) {
            let chunk = Chunk {
                id: Uuid::new_v4(),
                document_id,
                text: raw.text.clone(),
                token_count: raw.token_count,
                chunk_index: raw.chunk_index,
                start_char: raw.start_char,
                end_char: raw.end_char,
                embedding: embedding.clone(),
                meta: raw.meta.clone(),
            };
            sqlx::query(
                r#"
                INSERT INTO chunks
                    (id, document_id, text, token_count, chunk_index, start_char, end_char, embedding, meta)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                "#,
            )
            .bind(chunk.id.to_string())
            .bind(chunk.document_id.to_string())
            .bind(&chunk.text)
            .bind(chunk.token_count as i64)
            .bind(chunk.chunk_index as i64)
            .bind(chunk.start_char as i64)
            .bind(chunk.end_char as i64)
            .bind(Self::serialize_embedding(&chunk.embedding))
            .bind(serde_json::to_string(&chunk.meta)?)
            .execute(&mut *tx)
            .await?;
            chunks.push(chunk);
        }

        tx.commit().await?;
        debug!("persisted {} chunks for document {}", chunks.len(), document_id);
        Ok(chunks)
    }

    pub async fn list_chunks_for_collection(&self, collection_id: Uuid) -> Result<Vec<Chunk>> {
        let pool = self.pool()?;
        let rows = sqlx::query(
            r#"
            SELECT c.* FROM chunks c
            JOIN documents d ON c.document_id = d.id
            WHERE d.collection_id = ?1
            "#,
        )
        .bind(collection_id.to_string())
        .fetch_all(pool)
        .await?;
        rows.into_iter().map(Self::row_to_chunk).collect()
    }

    pub async fn get_chunks_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Chunk>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let pool = self.pool()?;
        let placeholders = ids.iter().map(|_| "?").collect::<Vec<_>>().join(",");
        let query = format!("SELECT * FROM chunks WHERE id IN ({placeholders})");
        let mut q = sqlx::query(&query);
        for id in ids {
            q = q.bind(id.to_string());
        }
        let rows = q.fetch_all(pool).await?;
        rows.into_iter().map(Self::row_to_chunk).collect()
    }

    /// Returns up to `k` chunks from the given collection ordered by
    /// descending cosine similarity to `query_vector`, ties broken by
    /// ascending chunk id. Brute-force full scan — recall@k is exact (1.0),
    /// which trivially satisfies the spec's `>= 0.95` allowance for
    /// approximate indexes.
    pub async fn nearest_chunks(
        &self,
        collection_id: Uuid,
        query_vector: &[f32],
        k: usize,
    ) -> Result<Vec<(Uuid, f32)>> {
        let chunks = self.list_chunks_for_collection(collection_id).await?;
        let mut scored: Vec<(Uuid, f32)> = chunks
            .iter()
            .map(|c| (c.id, Self::cosine_similarity(query_vector, &c.embedding)))
            .collect();
        scored.sort_by(|a, b| match b.1.partial_cmp(&a.1) {
            Some(std::cmp::Ordering::Equal) | None => a.0.cmp(&b.0),
            Some(ord) => ord,
        });
        scored.truncate(k);
        Ok(scored)
    }

    fn row_to_chunk(row: sqlx::sqlite::SqliteRow) -> Result<Chunk> {
        let id: String = row.get("id");
        let document_id: String = row.get("document_id");
        let embedding_blob: Vec<u8> = row.get("embedding");
        let meta_json: String = row.get("meta");
        let token_count: i64 = row.get("token_count");
        let chunk_index: i64 = row.get("chunk_index");
        let start_char: i64 = row.get("start_char");
        let end_char: i64 = row.get("end_char");
        Ok(Chunk {
            id: Uuid::parse_str(&id).map_err(|e| PipelineError::Storage(e.to_string()))?,
            document_id: Uuid::parse_str(&document_id)
                .map_err(|e| PipelineError::Storage(e.to_string()))?,
            text: row.get("text"),
            token_count: token_count as usize,
            chunk_index: chunk_index as usize,
            start_char: start_char as usize,
            end_char: end_char as usize,
            embedding: Self::deserialize_embedding(&embedding_blob),
            meta: serde_json::from_str::<ChunkMeta>(&meta_json).unwrap_or_default(),
        })
    }

    // ---- jobs ----

    pub async fn create_job(&self, collection_id: Uuid, document_id: Uuid) -> Result<Job> {
        let pool = self.pool()?;
        let job = Job {
            id: Uuid::new_v4(),
            collection_id,
            document_id,
            status: JobStatus::Pending,
            progress: 0,
            error_message: None,
            created_at: Utc::now(),
            completed_at: None,
        };
        sqlx::query(
            r#"
            INSERT INTO jobs (id, collection_id, document_id, status, progress, error_message, created_at, completed_at)
            VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6, NULL)
            "#,
        )
        .bind(job.id.to_string())
        .bind(job.collection_id.to_string())
        .bind(job.document_id.to_string())
        .bind(job.status.as_str())
        .bind(job.progress as i64)
        .bind(job.created_at.to_rfc3339())
        .execute(pool)
        .await?;
        Ok(job)
    }

    pub async fn update_job_progress(&self, job_id: Uuid, progress: u8) -> Result<()> {
        let pool = self.pool()?;
        sqlx::query("UPDATE jobs SET status = 'processing', progress = ?1 WHERE id = ?2")
            .bind(progress as i64)
            .bind(job_id.to_string())
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn update_job_status(
        &self,
        job_id: Uuid,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<()> {
        let pool = self.pool()?;
        let completed_at = status.is_terminal().then(|| Utc::now().to_rfc3339());
        let progress: i64 = if matches!(status, JobStatus::Completed) {
            100
        } else {
            -1
        };
        if progress >= 0 {
            sqlx::query(
                "UPDATE jobs SET status = ?1, progress = ?2, error_message = ?3, completed_at = ?4 WHERE id = ?5",
            )
            .bind(status.as_str())
            .bind(progress)
            .bind(error_message)
            .bind(completed_at)
            .bind(job_id.to_string())
            .execute(pool)
            .await?;
        } else {
            sqlx::query(
                "UPDATE jobs SET status = ?1, error_message = ?2, completed_at = ?3 WHERE id = ?4",
            )
            .bind(status.as_str())
            .bind(error_message)
            .bind(completed_at)
            .bind(job_id.to_string())
            .execute(pool)
            .await?;
        }
        Ok(())
    }

    pub async fn get_job(&self, job_id: Uuid) -> Result<Option<Job>> {
        let pool = self.pool()?;
        let row = sqlx::query("SELECT * FROM jobs WHERE id = ?1")
            .bind(job_id.to_string())
            .fetch_optional(pool)
            .await?;
        row.map(Self::row_to_job).transpose()
    }

    /// Startup sweep: any job left `pending` or `processing` across a
    /// restart is marked `failed` with `error_message = "interrupted"`.
    /// Idempotent.
    pub async fn sweep_interrupted_jobs(&self) -> Result<usize> {
        let pool = self.pool()?;
        let result = sqlx::query(
            r#"
            UPDATE jobs SET status = 'failed', error_message = 'interrupted', completed_at = ?1
            WHERE status IN ('pending', 'processing')
            "#,
        )
        .bind(Utc::now().to_rfc3339())
        .execute(pool)
        .await?;
        let swept = result.rows_affected() as usize;
        if swept > 0 {
            warn!("swept {swept} interrupted job(s) at startup");
        }
        Ok(swept)
    }

    fn row_to_job(row: sqlx::sqlite::SqliteRow) -> Result<Job> {
        let id: String = row.get("id");
        let collection_id: String = row.get("collection_id");
        let document_id: String = row.get("document_id");
        let status: String = row.get("status");
        let progress: i64 = row.get("progress");
        let created_at: String = row.get("created_at");
        let completed_at: Option<String> = row.get("completed_at");
        Ok(Job {
            id: Uuid::parse_str(&id).map_err(|e| PipelineError::Storage(e.to_string()))?,
            collection_id: Uuid::parse_str(&collection_id)
                .map_err(|e| PipelineError::Storage(e.to_string()))?,
            document_id: Uuid::parse_str(&document_id)
                .map_err(|e| PipelineError::Storage(e.to_string()))?,
            status: JobStatus::parse(&status)
                .ok_or_else(|| PipelineError::Storage(format!("bad job status {status}")))?,
            progress: progress as u8,
            error_message: row.get("error_message"),
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| PipelineError::Storage(e.to_string()))?
                .with_timezone(&Utc),
            completed_at: completed_at
                .map(|s| {
                    DateTime::parse_from_rfc3339(&s)
                        .map(|dt| dt.with_timezone(&Utc))
                        .map_err(|e| PipelineError::Storage(e.to_string()))
                })
                .transpose()?,
        })
    }

    // ---- queries & feedback ----

    #[allow(clippy::too_many_arguments)]
    pub async fn record_query(
        &self,
        collection_id: Uuid,
        question: &str,
        answer: &str,
        citations: Vec<Citation>,
        latency_ms: i64,
        llm_model: &str,
        retrieval_score: f32,
    ) -> Result<Query> {
        let pool = self.pool()?;
        let query = Query {
            id: Uuid::new_v4(),
            collection_id,
            question: question.to_string(),
            answer: answer.to_string(),
            citations,
            latency_ms,
            llm_model: llm_model.to_string(),
            retrieval_score,
            created_at: Utc::now(),
        };
        sqlx::query(
            r#"
            INSERT INTO queries
                (id, collection_id, question, answer, citations, latency_ms, llm_model, retrieval_score, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(query.id.to_string())
        .bind(query.collection_id.to_string())
        .bind(&query.question)
        .bind(&query.answer)
        .bind(serde_json::to_string(&query.citations)?)
        .bind(query.latency_ms)
        .bind(&query.llm_model)
        .bind(query.retrieval_score)
        .bind(query.created_at.to_rfc3339())
        .execute(pool)
        .await?;
        Ok(query)
    }

    pub async fn record_query_chunks(&self, query_id: Uuid, ranked: &[(Uuid, f32)]) -> Result<()> {
        let pool = self.pool()?;
        for (rank, (chunk_id, score)) in ranked.iter().enumerate() {
            sqlx::query(
                "INSERT INTO query_chunks (query_id, chunk_id, rank, score) VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(query_id.to_string())
            .bind(chunk_id.to_string())
            .bind((rank + 1) as i64)
            .bind(score)
            .execute(pool)
            .await?;
        }
        Ok(())
    }

    pub async fn upsert_feedback(
        &self,
        query_id: Uuid,
        value: i32,
        note: Option<&str>,
    ) -> Result<Feedback> {
        let pool = self.pool()?;
        let existing = sqlx::query("SELECT id FROM feedback WHERE query_id = ?1")
            .bind(query_id.to_string())
            .fetch_optional(pool)
            .await?;

        let (id, created_at) = if let Some(row) = existing {
            let id: String = row.get("id");
            (Uuid::parse_str(&id).map_err(|e| PipelineError::Storage(e.to_string()))?, None)
        } else {
            (Uuid::new_v4(), Some(Utc::now()))
        };

        if let Some(created_at) = created_at {
            sqlx::query(
                "INSERT INTO feedback (id, query_id, value, note, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(id.to_string())
            .bind(query_id.to_string())
            .bind(value)
            .bind(note)
            .bind(created_at.to_rfc3339())
            .execute(pool)
            .await?;
            Ok(Feedback {
                id,
                query_id,
                value,
                note: note.map(|s| s.to_string()),
                created_at,
            })
        } else {
            sqlx::query("UPDATE feedback SET value = ?1, note = ?2 WHERE query_id = ?3")
                .bind(value)
                .bind(note)
                .bind(query_id.to_string())
                .execute(pool)
                .await?;
            let row = sqlx::query("SELECT * FROM feedback WHERE query_id = ?1")
                .bind(query_id.to_string())
                .fetch_one(pool)
                .await?;
            Self::row_to_feedback(row)
        }
    }

    fn row_to_feedback(row: sqlx::sqlite::SqliteRow) -> Result<Feedback> {
        let id: String = row.get("id");
        let query_id: String = row.get("query_id");
        let created_at: String = row.get("created_at");
        Ok(Feedback {
            id: Uuid::parse_str(&id).map_err(|e| PipelineError::Storage(e.to_string()))?,
            query_id: Uuid::parse_str(&query_id)
                .map_err(|e| PipelineError::Storage(e.to_string()))?,
            value: row.get("value"),
            note: row.get("note"),
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| PipelineError::Storage(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[allow(dead_code)]
fn _silence_unused(_: &QueryChunk) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::{ChunkMeta, RawChunk};

    async fn store() -> CatalogStore {
        let mut store = CatalogStore::new(StorageConfig {
            database_url: "sqlite::memory:".to_string(),
        });
        store.initialize().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_collection_lifecycle() {
        let store = store().await;
        let c = store.create_collection("docs", "my docs").await.unwrap();
        assert_eq!(store.list_collections().await.unwrap().len(), 1);
        assert!(store.create_collection("docs", "dup").await.is_err());
        assert_eq!(store.get_collection(c.id).await.unwrap().unwrap().name, "docs");
    }

    #[tokio::test]
    async fn test_document_checksum_dedup() {
        let store = store().await;
        let c = store.create_collection("docs", "").await.unwrap();
        let d1 = store
            .create_document(c.id, "a", SourceType::Text, None, "abc123", HashMap::new())
            .await
            .unwrap();
        assert!(store.find_document_by_checksum("abc123").await.unwrap().is_some());
        assert_eq!(
            store.find_document_by_checksum("abc123").await.unwrap().unwrap().id,
            d1.id
        );
        assert!(store.find_document_by_checksum("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_chunks_and_nearest() {
        let store = store().await;
        let c = store.create_collection("docs", "").await.unwrap();
        let d = store
            .create_document(c.id, "a", SourceType::Text, None, "x", HashMap::new())
            .await
            .unwrap();

        let raw = vec![
            RawChunk {
                text: "alpha".into(),
                chunk_index: 0,
                token_count: 1,
                start_char: 0,
                end_char: 5,
                meta: ChunkMeta::default(),
            },
            RawChunk {
                text: "beta".into(),
                chunk_index: 1,
                token_count: 1,
                start_char: 6,
                end_char: 10,
                meta: ChunkMeta::default(),
            },
        ];
        let embeddings = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let chunks = store.insert_chunks(d.id, &raw, &embeddings).await.unwrap();
        assert_eq!(chunks.len(), 2);

        let nearest = store.nearest_chunks(c.id, &[1.0, 0.0], 10).await.unwrap();
        assert_eq!(nearest[0].0, chunks[0].id);
        assert!(nearest[0].1 > nearest[1].1);
    }

    #[tokio::test]
    async fn test_job_lifecycle_and_sweep() {
        let store = store().await;
        let c = store.create_collection("docs", "").await.unwrap();
        let d = store
            .create_document(c.id, "a", SourceType::Text, None, "x", HashMap::new())
            .await
            .unwrap();
        let job = store.create_job(c.id, d.id).await.unwrap();
        assert_eq!(job.status, JobStatus::Pending);

        store.update_job_progress(job.id, 30).await.unwrap();
        let refreshed = store.get_job(job.id).await.unwrap().unwrap();
        assert_eq!(refreshed.status, JobStatus::Processing);
        assert_eq!(refreshed.progress, 30);

        let swept = store.sweep_interrupted_jobs().await.unwrap();
        assert_eq!(swept, 1);
        let after = store.get_job(job.id).await.unwrap().unwrap();
        assert_eq!(after.status, JobStatus::Failed);
        assert_eq!(after.error_message.as_deref(), Some("interrupted"));

        // Idempotent: a second sweep finds nothing left to sweep.
        assert_eq!(store.sweep_interrupted_jobs().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_feedback_upsert() {
        let store = store().await;
        let c = store.create_collection("docs", "").await.unwrap();
        let q = store
            .record_query(c.id, "q", "a", vec![], 10, "mistral", 0.5)
            .await
            .unwrap();

        store.upsert_feedback(q.id, 1, None).await.unwrap();
        store.upsert_feedback(q.id, -1, Some("actually wrong")).await.unwrap();

        let pool = store.pool().unwrap();
        let rows = sqlx::query("SELECT COUNT(*) as n FROM feedback")
            .fetch_one(pool)
            .await
            .unwrap();
        let n: i64 = rows.get("n");
        assert_eq!(n, 1);
    }
}
