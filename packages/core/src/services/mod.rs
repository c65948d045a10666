//! Services
//!
//! - `ArticleStore` / `AssetUploader` - contracts for the external collaborators
//! - `InMemoryArticleStore` - process-local store
//! - `ArticleService` - open and save editor sessions against a store

mod article_service;
mod collaborators;
mod memory_store;

pub use article_service::ArticleService;
pub use collaborators::{ArticleStore, AssetFile, AssetUploader};
pub use memory_store::InMemoryArticleStore;
