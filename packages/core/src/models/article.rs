//! Persisted article body shape
//!
//! `ArticleBody` is what the article store hands to an editor session and what
//! the session hands back on save: two plain ordered arrays, persisted as-is.

use crate::models::{ContentBlock, GalleryImage};
use serde::{Deserialize, Serialize};

/// Ordered body content and gallery of one article
///
/// # Examples
///
/// ```rust
/// use article_editor_core::models::ArticleBody;
///
/// let body: ArticleBody = serde_json::from_str(
///     r#"{"content":[{"type":"heading","content":"Hello"}]}"#,
/// ).unwrap();
///
/// assert_eq!(body.content.len(), 1);
/// assert!(body.gallery.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleBody {
    #[serde(default)]
    pub content: Vec<ContentBlock>,

    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
}

impl ArticleBody {
    pub fn new(content: Vec<ContentBlock>, gallery: Vec<GalleryImage>) -> Self {
        Self { content, gallery }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.gallery.is_empty()
    }
}
