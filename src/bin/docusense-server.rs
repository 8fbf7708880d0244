//! Process entry point: loads configuration, wires up the catalog
//! store, embedding service, LLM client, hybrid retriever and job
//! manager, runs the startup interrupted-job sweep, and serves the
//! HTTP shell.

use docusense::api::{start_server, AppState};
use docusense::catalog::CatalogStore;
use docusense::config::AppConfig;
use docusense::embedding::{EmbeddingService, OllamaEmbeddingService};
use docusense::jobs::JobManager;
use docusense::llm::{LlmClient, OllamaLlmClient};
use docusense::pipeline::IngestionPipeline;
use docusense::retrieval::HybridRetriever;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("DOCUSENSE_CONFIG") {
        Ok(path) => AppConfig::from_file(&path)?,
        Err(_) => AppConfig::default(),
    };
    config.validate()?;
    let config = Arc::new(config);

    let mut catalog = CatalogStore::new(config.storage.clone());
    catalog.initialize().await?;
    let catalog = Arc::new(catalog);

    let embedding: Arc<dyn EmbeddingService> =
        Arc::new(OllamaEmbeddingService::new(config.embedding.clone()));
    let llm: Arc<dyn LlmClient> = Arc::new(OllamaLlmClient::new(config.llm.clone()));

    let retriever = Arc::new(HybridRetriever::new(
        catalog.clone(),
        embedding.clone(),
        config.retrieval.clone(),
    ));

    let pipeline = Arc::new(IngestionPipeline::new(
        catalog.clone(),
        embedding.clone(),
        config.chunker.clone(),
    ));
    let jobs = Arc::new(JobManager::spawn(catalog.clone(), pipeline, config.jobs.clone()));

    let state = AppState {
        catalog,
        embedding,
        llm,
        retriever,
        jobs,
        config: config.clone(),
    };

    start_server(state, &config.http.bind_addr).await?;
    Ok(())
}
