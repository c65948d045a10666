//! In-memory article store
//!
//! Backs tests and hosts that keep articles in process. Bodies are stored as
//! serialized JSON so a save/load cycle goes through the same wire shape a
//! remote store would see.

use crate::error::{EditorError, Result};
use crate::models::ArticleBody;
use crate::services::ArticleStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryArticleStore {
    articles: RwLock<HashMap<String, String>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored JSON for `article_id`
    pub async fn raw(&self, article_id: &str) -> Option<String> {
        self.articles.read().await.get(article_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn load(&self, article_id: &str) -> Result<ArticleBody> {
        let articles = self.articles.read().await;
        let raw = articles
            .get(article_id)
            .ok_or_else(|| EditorError::ArticleNotFound(article_id.to_string()))?;
        Ok(serde_json::from_str(raw)?)
    }

    async fn save(&self, article_id: &str, body: ArticleBody) -> Result<()> {
        let raw = serde_json::to_string(&body)?;
        self.articles
            .write()
            .await
            .insert(article_id.to_string(), raw);
        Ok(())
    }
}
