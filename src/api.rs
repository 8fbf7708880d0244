//! HTTP Shell (C10): the REST surface over the ingestion-and-retrieval
//! pipeline. Grounded on the platform's existing axum integration —
//! `AppState`, the `ApiError`/`IntoResponse` bridge, `utoipa` docs, and
//! CORS + trace middleware — generalized to collections, ingestion,
//! querying and feedback.

use crate::catalog::CatalogStore;
use crate::config::AppConfig;
use crate::embedding::EmbeddingService;
use crate::error::PipelineError;
use crate::jobs::JobManager;
use crate::llm::{self, ContextPassage, LlmClient};
use crate::models::{Citation, Job, JobStatus, SourceType};
use crate::pipeline::{self, IngestSource};
use crate::retrieval::HybridRetriever;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub embedding: Arc<dyn EmbeddingService>,
    pub llm: Arc<dyn LlmClient>,
    pub retriever: Arc<HybridRetriever>,
    pub jobs: Arc<JobManager>,
    pub config: Arc<AppConfig>,
}

/// Wraps `PipelineError` so it can be returned directly from handlers.
#[derive(Debug)]
pub struct ApiError(PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PipelineError::Validation(_) | PipelineError::Parse(_) | PipelineError::Chunk(_) => {
                StatusCode::BAD_REQUEST
            }
            PipelineError::NotFound(_) => StatusCode::NOT_FOUND,
            PipelineError::DuplicateDocument => StatusCode::CONFLICT,
            PipelineError::Embedding(_) | PipelineError::Http(_) => StatusCode::BAD_GATEWAY,
            PipelineError::Interrupted => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
            category: self.0.category().to_string(),
        });
        (status, body).into_response()
    }
}

type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MetricsResponse {
    pub total_collections: usize,
    pub total_documents: usize,
    pub total_queries: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCollectionRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub document_count: usize,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct IngestUrlRequest {
    pub collection_id: Uuid,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IngestResponse {
    pub job_id: Uuid,
    pub document_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JobResponse {
    pub id: Uuid,
    pub status: String,
    pub progress: u8,
    pub error_message: Option<String>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            status: job.status.as_str().to_string(),
            progress: job.progress,
            error_message: job.error_message,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct QueryRequest {
    pub question: String,
    pub collection_id: Uuid,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_use_hybrid")]
    pub use_hybrid: bool,
}

fn default_top_k() -> usize {
    10
}

fn default_use_hybrid() -> bool {
    true
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QueryResponse {
    pub query_id: Uuid,
    pub answer: String,
    pub citations: Vec<Citation>,
    pub confidence: f32,
    pub latency_ms: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FeedbackRequest {
    pub value: i32,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackResponse {
    pub query_id: Uuid,
    pub value: i32,
}

#[derive(Debug, Deserialize)]
pub struct IngestUploadQuery {
    pub collection_id: Uuid,
    #[serde(default)]
    pub source_type: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health_handler, metrics_handler, ask_handler),
    components(schemas(
        HealthResponse,
        MetricsResponse,
        ErrorResponse,
        CreateCollectionRequest,
        CollectionResponse,
        IngestUrlRequest,
        IngestResponse,
        JobResponse,
        QueryRequest,
        QueryResponse,
        FeedbackRequest,
        FeedbackResponse,
    )),
    tags(
        (name = "health", description = "Health and metrics"),
        (name = "collections", description = "Collection management"),
        (name = "ingest", description = "Document ingestion"),
        (name = "query", description = "Question answering")
    ),
    info(title = "docusense API", version = "0.1.0", description = "Document ingestion and hybrid retrieval question-answering service")
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/metrics", get(metrics_handler))
        .route("/api/collections", post(create_collection_handler).get(list_collections_handler))
        .route("/api/collections/{id}", get(get_collection_handler))
        .route("/api/ingest/upload", post(ingest_upload_handler))
        .route("/api/ingest/url", post(ingest_url_handler))
        .route("/api/ingest/status/{job_id}", get(get_job_status_handler))
        .route("/api/ask", post(ask_handler))
        .route("/api/feedback/{query_id}", post(submit_feedback_handler))
        .route("/api-docs/openapi.json", get(openapi_spec_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn openapi_spec_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn root_handler() -> &'static str {
    "docusense"
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = HealthResponse)))]
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

#[utoipa::path(get, path = "/api/metrics", tag = "health", responses((status = 200, body = MetricsResponse)))]
async fn metrics_handler(State(state): State<AppState>) -> ApiResult<Json<MetricsResponse>> {
    let collections = state.catalog.list_collections().await?;
    let mut total_documents = 0;
    for c in &collections {
        total_documents += state.catalog.count_documents(c.id).await?;
    }
    Ok(Json(MetricsResponse {
        total_collections: collections.len(),
        total_documents,
        total_queries: 0,
    }))
}

async fn create_collection_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateCollectionRequest>,
) -> ApiResult<Json<CollectionResponse>> {
    let collection = state
        .catalog
        .create_collection(&request.name, &request.description)
        .await?;
    Ok(Json(CollectionResponse {
        id: collection.id,
        name: collection.name,
        description: collection.description,
        document_count: 0,
        created_at: collection.created_at,
    }))
}

async fn list_collections_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CollectionResponse>>> {
    let collections = state.catalog.list_collections().await?;
    let mut responses = Vec::with_capacity(collections.len());
    for c in collections {
        let document_count = state.catalog.count_documents(c.id).await?;
        responses.push(CollectionResponse {
            id: c.id,
            name: c.name,
            description: c.description,
            document_count,
            created_at: c.created_at,
        });
    }
    Ok(Json(responses))
}

async fn get_collection_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CollectionResponse>> {
    let collection = state
        .catalog
        .get_collection(id)
        .await?
        .ok_or_else(|| PipelineError::NotFound(format!("collection {id} not found")))?;
    let document_count = state.catalog.count_documents(id).await?;
    Ok(Json(CollectionResponse {
        id: collection.id,
        name: collection.name,
        description: collection.description,
        document_count,
        created_at: collection.created_at,
    }))
}

async fn ingest_upload_handler(
    State(state): State<AppState>,
    Query(params): Query<IngestUploadQuery>,
    mut multipart: Multipart,
) -> ApiResult<Json<IngestResponse>> {
    let mut bytes: Option<Vec<u8>> = None;
    let mut filename = "document".to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| PipelineError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            if let Some(name) = field.file_name() {
                filename = name.to_string();
            }
            let data = field
                .bytes()
                .await
                .map_err(|e| PipelineError::Validation(format!("failed to read upload: {e}")))?;
            bytes = Some(data.to_vec());
        }
    }

    let bytes = bytes.ok_or_else(|| PipelineError::Validation("no file field in upload".to_string()))?;

    let source_type = match params.source_type.as_deref() {
        Some(s) => SourceType::parse(s)
            .ok_or_else(|| PipelineError::Validation(format!("unknown source_type: {s}")))?,
        None => infer_source_type(&filename),
    };

    let collection = state
        .catalog
        .get_collection(params.collection_id)
        .await?
        .ok_or_else(|| PipelineError::NotFound(format!("collection {} not found", params.collection_id)))?;

    let parsed = pipeline::parse_source(
        IngestSource::Upload { bytes, source_type },
        state.config.jobs.fetch_timeout_secs,
    )
    .await?;

    if let Some(existing) = state.catalog.find_document_by_checksum(&parsed.checksum).await? {
        return Err(PipelineError::Validation(format!(
            "duplicate of existing document {}",
            existing.id
        ))
        .into());
    }

    let document = state
        .catalog
        .create_document(
            collection.id,
            &filename,
            parsed.source_type,
            parsed.source_url.as_deref(),
            &parsed.checksum,
            pipeline::document_metadata(&parsed.title),
        )
        .await?;

    let job_id = state
        .jobs
        .submit(collection.id, document.id, parsed.text, parsed.source_type)
        .await?;

    Ok(Json(IngestResponse {
        job_id,
        document_id: document.id,
    }))
}

fn infer_source_type(filename: &str) -> SourceType {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        SourceType::Pdf
    } else if lower.ends_with(".md") || lower.ends_with(".markdown") {
        SourceType::Markdown
    } else {
        SourceType::Text
    }
}

async fn ingest_url_handler(
    State(state): State<AppState>,
    Json(request): Json<IngestUrlRequest>,
) -> ApiResult<Json<IngestResponse>> {
    let collection = state
        .catalog
        .get_collection(request.collection_id)
        .await?
        .ok_or_else(|| PipelineError::NotFound(format!("collection {} not found", request.collection_id)))?;

    let parsed = pipeline::parse_source(
        IngestSource::Url {
            url: request.url.clone(),
        },
        state.config.jobs.fetch_timeout_secs,
    )
    .await?;

    if let Some(existing) = state.catalog.find_document_by_checksum(&parsed.checksum).await? {
        return Err(PipelineError::Validation(format!(
            "duplicate of existing document {}",
            existing.id
        ))
        .into());
    }

    let title = request.title.or_else(|| parsed.title.clone()).unwrap_or_else(|| request.url.clone());

    let document = state
        .catalog
        .create_document(
            collection.id,
            &title,
            parsed.source_type,
            parsed.source_url.as_deref(),
            &parsed.checksum,
            pipeline::document_metadata(&parsed.title),
        )
        .await?;

    let job_id = state
        .jobs
        .submit(collection.id, document.id, parsed.text, parsed.source_type)
        .await?;

    Ok(Json(IngestResponse {
        job_id,
        document_id: document.id,
    }))
}

async fn get_job_status_handler(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> ApiResult<Json<JobResponse>> {
    let job = state
        .jobs
        .status(job_id)
        .await?
        .ok_or_else(|| PipelineError::NotFound(format!("job {job_id} not found")))?;
    Ok(Json(job.into()))
}

#[utoipa::path(post, path = "/api/ask", tag = "query", request_body = QueryRequest, responses((status = 200, body = QueryResponse)))]
async fn ask_handler(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> ApiResult<Json<QueryResponse>> {
    let start = Instant::now();

    let collection = state
        .catalog
        .get_collection(request.collection_id)
        .await?
        .ok_or_else(|| PipelineError::NotFound(format!("collection {} not found", request.collection_id)))?;

    let top_k = if request.top_k == 0 { state.config.retrieval.top_k } else { request.top_k };

    let retrieved = if request.use_hybrid {
        state.retriever.search_hybrid(collection.id, &request.question, top_k).await?
    } else {
        state.retriever.search_vector_only(collection.id, &request.question, top_k).await?
    };

    let chunk_ids: Vec<Uuid> = retrieved.iter().map(|r| r.chunk_id).collect();
    let chunks = state.catalog.get_chunks_by_ids(&chunk_ids).await?;
    let chunks_by_id: std::collections::HashMap<Uuid, &crate::models::Chunk> =
        chunks.iter().map(|c| (c.id, c)).collect();

    let contexts: Vec<ContextPassage> = retrieved
        .iter()
        .filter_map(|r| chunks_by_id.get(&r.chunk_id))
        .take(5)
        .map(|c| ContextPassage {
            text: c.text.clone(),
            document_id: c.document_id,
            chunk_index: c.chunk_index,
        })
        .collect();

    let confidence = llm::check_answerability(&request.question, &contexts);

    let (answer, citations, model_name) = if confidence < state.config.retrieval.confidence_threshold {
        (
            "I don't have enough information in the provided documents to answer this question."
                .to_string(),
            Vec::new(),
            "none".to_string(),
        )
    } else {
        let (answer, extracted) = state.llm.generate_answer(&request.question, &contexts).await?;
        let citations = extracted
            .into_iter()
            .map(|c| Citation {
                index: c.index,
                text_preview: c.text_preview,
                document_id: c.document_id,
                chunk_index: c.chunk_index,
            })
            .collect();
        (answer, citations, state.config.llm.default_model.clone())
    };

    let latency_ms = start.elapsed().as_millis() as i64;

    // A Query row is always written, even on the low-confidence
    // short-circuit, so feedback can still be attached to it.
    let query = state
        .catalog
        .record_query(
            collection.id,
            &request.question,
            &answer,
            citations.clone(),
            latency_ms,
            &model_name,
            confidence,
        )
        .await?;

    let ranked: Vec<(Uuid, f32)> = retrieved.iter().map(|r| (r.chunk_id, r.score)).collect();
    state.catalog.record_query_chunks(query.id, &ranked).await?;

    Ok(Json(QueryResponse {
        query_id: query.id,
        answer,
        citations,
        confidence,
        latency_ms,
    }))
}

async fn submit_feedback_handler(
    State(state): State<AppState>,
    Path(query_id): Path<Uuid>,
    Json(request): Json<FeedbackRequest>,
) -> ApiResult<Json<FeedbackResponse>> {
    let feedback = state
        .catalog
        .upsert_feedback(query_id, request.value, request.note.as_deref())
        .await?;
    Ok(Json(FeedbackResponse {
        query_id: feedback.query_id,
        value: feedback.value,
    }))
}

/// Starts the HTTP server, running the startup sweep for interrupted
/// jobs first so the API never answers requests against a job table
/// that still has stale `processing` rows in it.
pub async fn start_server(state: AppState, bind_addr: &str) -> crate::error::Result<()> {
    state.jobs.sweep_interrupted().await?;

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| PipelineError::Config(format!("failed to bind {bind_addr}: {e}")))?;

    info!("docusense HTTP shell listening on {bind_addr}");
    axum::serve(listener, app)
        .await
        .map_err(|e| PipelineError::Config(format!("server error: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_source_type() {
        assert_eq!(infer_source_type("report.pdf"), SourceType::Pdf);
        assert_eq!(infer_source_type("notes.md"), SourceType::Markdown);
        assert_eq!(infer_source_type("plain.txt"), SourceType::Text);
    }

    #[test]
    fn test_job_response_from_job() {
        let job = Job {
            id: Uuid::new_v4(),
            collection_id: Uuid::new_v4(),
            document_id: Uuid::new_v4(),
            status: JobStatus::Processing,
            progress: 50,
            error_message: None,
            created_at: chrono::Utc::now(),
            completed_at: None,
        };
        let response: JobResponse = job.into();
        assert_eq!(response.status, "processing");
        assert_eq!(response.progress, 50);
    }
}
