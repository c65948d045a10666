//! Article Service
//!
//! Opens editor sessions from the article store and writes them back. This is
//! the only place the editor core and the store meet.

use crate::config::EditorConfig;
use crate::editor::SectionEditor;
use crate::error::{EditorError, Result};
use crate::models::ArticleBody;
use crate::render::ControlTree;
use crate::services::ArticleStore;
use std::sync::Arc;

pub struct ArticleService<S: ArticleStore + ?Sized> {
    store: Arc<S>,
    config: EditorConfig,
}

impl<S: ArticleStore + ?Sized> ArticleService<S> {
    /// Create a service over `store`
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Config` if `config` fails validation.
    pub fn new(store: Arc<S>, config: EditorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Open an editor session on a stored article
    pub async fn open(&self, article_id: &str) -> Result<SectionEditor> {
        let body = self.store.load(article_id).await?;
        tracing::info!(
            "Opening article '{}' ({} blocks, {} gallery images)",
            article_id,
            body.content.len(),
            body.gallery.len()
        );
        Ok(SectionEditor::open(body, self.config.clone()))
    }

    /// Open a stored article, or an empty session if there is none yet
    pub async fn open_or_new(&self, article_id: &str) -> Result<SectionEditor> {
        match self.open(article_id).await {
            Err(EditorError::ArticleNotFound(_)) => {
                tracing::info!("Article '{}' not stored yet, starting empty", article_id);
                Ok(SectionEditor::new(self.config.clone()))
            }
            other => other,
        }
    }

    /// Capture the session and persist its body, preserving order
    pub async fn save<T: ControlTree>(
        &self,
        article_id: &str,
        editor: &mut SectionEditor<T>,
    ) -> Result<ArticleBody> {
        let body = editor.snapshot();
        self.store.save(article_id, body.clone()).await?;
        editor.mark_saved();

        tracing::info!(
            "Saved article '{}' ({} blocks, {} gallery images)",
            article_id,
            body.content.len(),
            body.gallery.len()
        );
        Ok(body)
    }
}
