//! Job Manager (C5): a bounded worker pool draining an ingestion queue.
//! `submit` hands back a `Job` id the instant the job is recorded as
//! pending — before any chunk/embed/persist stage has run — and every
//! subsequent status read goes through the catalog store, never an
//! in-memory cache, so a restarted process sees the same answers a live
//! one would.

use crate::catalog::CatalogStore;
use crate::config::JobConfig;
use crate::error::PipelineError;
use crate::models::{JobStatus, SourceType};
use crate::pipeline::IngestionPipeline;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

struct JobTask {
    job_id: Uuid,
    document_id: Uuid,
    text: String,
    source_type: SourceType,
}

pub struct JobManager {
    catalog: Arc<CatalogStore>,
    sender: flume::Sender<JobTask>,
}

impl JobManager {
    /// Spawns `config.worker_pool_size` worker tasks and returns a handle
    /// that can accept submissions. Each worker independently pulls from
    /// the shared bounded channel.
    pub fn spawn(catalog: Arc<CatalogStore>, pipeline: Arc<IngestionPipeline>, config: JobConfig) -> Self {
        let (sender, receiver) = flume::bounded::<JobTask>(config.queue_capacity);

        for worker_id in 0..config.worker_pool_size.max(1) {
            let receiver = receiver.clone();
            let catalog = catalog.clone();
            let pipeline = pipeline.clone();
            tokio::spawn(async move {
                info!("ingestion worker {worker_id} started");
                while let Ok(task) = receiver.recv_async().await {
                    Self::process(&catalog, &pipeline, task).await;
                }
                info!("ingestion worker {worker_id} stopped");
            });
        }

        Self { catalog, sender }
    }

    async fn process(catalog: &Arc<CatalogStore>, pipeline: &Arc<IngestionPipeline>, task: JobTask) {
        let result = pipeline
            .run(task.job_id, task.document_id, &task.text, task.source_type)
            .await;

        if let Err(e) = result {
            error!("job {} failed: {e}", task.job_id);
            if let Err(update_err) = catalog
                .update_job_status(task.job_id, JobStatus::Failed, Some(&e.as_job_message()))
                .await
            {
                error!("failed to record job failure for {}: {update_err}", task.job_id);
            }
        }
    }

    /// Creates the job row (status `pending`) and enqueues its work.
    /// Returns the job id as soon as the row is created, without waiting
    /// for a worker to pick it up.
    pub async fn submit(
        &self,
        collection_id: Uuid,
        document_id: Uuid,
        text: String,
        source_type: SourceType,
    ) -> crate::error::Result<Uuid> {
        let job = self.catalog.create_job(collection_id, document_id).await?;

        self.sender
            .send_async(JobTask {
                job_id: job.id,
                document_id,
                text,
                source_type,
            })
            .await
            .map_err(|_| PipelineError::Generic(anyhow::anyhow!("ingestion queue is closed")))?;

        Ok(job.id)
    }

    pub async fn status(&self, job_id: Uuid) -> crate::error::Result<Option<crate::models::Job>> {
        self.catalog.get_job(job_id).await
    }

    /// Marks any job left `pending`/`processing` across a restart as
    /// `failed`. Must run before the HTTP shell starts accepting
    /// ingestion requests.
    pub async fn sweep_interrupted(&self) -> crate::error::Result<usize> {
        self.catalog.sweep_interrupted_jobs().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChunkerConfig, EmbeddingConfig, StorageConfig};
    use crate::embedding::OllamaEmbeddingService;
    use crate::models::SourceType;
    use std::collections::HashMap;
    use std::time::Duration;

    async fn test_manager() -> (JobManager, Arc<CatalogStore>) {
        let mut store = CatalogStore::new(StorageConfig {
            database_url: "sqlite::memory:".to_string(),
        });
        store.initialize().await.unwrap();
        let catalog = Arc::new(store);
        let embedding = Arc::new(OllamaEmbeddingService::new(EmbeddingConfig::default()));
        let pipeline = Arc::new(IngestionPipeline::new(
            catalog.clone(),
            embedding,
            ChunkerConfig::default(),
        ));
        let manager = JobManager::spawn(
            catalog.clone(),
            pipeline,
            JobConfig {
                worker_pool_size: 1,
                queue_capacity: 4,
                ..JobConfig::default()
            },
        );
        (manager, catalog)
    }

    #[tokio::test]
    async fn test_submit_returns_pending_job_immediately() {
        let (manager, catalog) = test_manager().await;
        let collection = catalog.create_collection("docs", "").await.unwrap();
        let document = catalog
            .create_document(collection.id, "t", SourceType::Text, None, "abc", HashMap::new())
            .await
            .unwrap();

        let job_id = manager
            .submit(collection.id, document.id, "hello".to_string(), SourceType::Text)
            .await
            .unwrap();

        let job = manager.status(job_id).await.unwrap().unwrap();
        assert!(matches!(job.status, JobStatus::Pending | JobStatus::Processing));
    }

    #[tokio::test]
    async fn test_sweep_marks_interrupted_jobs_failed() {
        let (manager, catalog) = test_manager().await;
        let collection = catalog.create_collection("docs", "").await.unwrap();
        let document = catalog
            .create_document(collection.id, "t", SourceType::Text, None, "abc", HashMap::new())
            .await
            .unwrap();
        let job = catalog.create_job(collection.id, document.id).await.unwrap();

        tokio::time::sleep(Duration::from_millis(10)).await;
        let swept = manager.sweep_interrupted().await.unwrap();
        assert_eq!(swept, 1);
        let refreshed = manager.status(job.id).await.unwrap().unwrap();
        assert_eq!(refreshed.status, JobStatus::Failed);
    }
}
