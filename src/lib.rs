//! A document ingestion and retrieval pipeline: upload or point at a
//! document, it gets parsed, deduplicated, chunked, embedded and
//! indexed, and then questions against it are answered with hybrid
//! vector + lexical retrieval and cited, confidence-scored generation.
//!
//! # Example
//!
//! ```rust,no_run
//! use docusense::config::AppConfig;
//! use docusense::catalog::CatalogStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::default();
//!     config.validate()?;
//!
//!     let mut catalog = CatalogStore::new(config.storage.clone());
//!     catalog.initialize().await?;
//!
//!     let collection = catalog.create_collection("handbook", "employee handbook").await?;
//!     println!("created collection {}", collection.id);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod chunker;
pub mod config;
pub mod embedding;
pub mod error;
pub mod jobs;
pub mod lexical;
pub mod llm;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod retrieval;

pub use catalog::CatalogStore;
pub use config::AppConfig;
pub use error::{PipelineError, Result};
pub use jobs::JobManager;
pub use retrieval::HybridRetriever;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with(char::is_numeric));
    }
}
