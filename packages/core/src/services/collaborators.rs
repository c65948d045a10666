//! External collaborator contracts
//!
//! The editor core does not persist articles or move files itself. It talks
//! to an article store and an asset uploader through these traits; hosts
//! supply the real implementations.

use crate::error::Result;
use crate::models::ArticleBody;
use async_trait::async_trait;

/// A file picked by the user for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl AssetFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Blob storage for images and videos
///
/// Resolves to the public URL of the stored asset.
#[async_trait]
pub trait AssetUploader: Send + Sync {
    async fn upload(&self, file: AssetFile) -> anyhow::Result<String>;
}

/// Persistent storage of article bodies
///
/// Arrays are stored as given; a store must never reorder them.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Load the body of `article_id`
    ///
    /// Returns `EditorError::ArticleNotFound` if nothing is stored under the id.
    async fn load(&self, article_id: &str) -> Result<ArticleBody>;

    /// Persist `body` under `article_id`, replacing any previous body
    async fn save(&self, article_id: &str, body: ArticleBody) -> Result<()>;
}
