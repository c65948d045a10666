//! Editor Error Types
//!
//! Structural edits never fail (they report `MutationOutcome::NoOp`), so the
//! errors here cover the I/O edges of a session: uploads, the article store and
//! configuration.

use crate::editor::ListKind;
use crate::models::{BlockId, ValidationError};
use crate::render::FieldSelector;
use thiserror::Error;

/// Editor session and collaborator errors
#[derive(Error, Debug)]
pub enum EditorError {
    /// No entry with this id in the given list
    #[error("Block {id} not found in {list} list")]
    UnknownBlock { list: ListKind, id: BlockId },

    /// Upload requested for a field that does not take an asset URL
    #[error("Field '{selector}' of block {id} does not accept uploads")]
    NotUploadable { id: BlockId, selector: FieldSelector },

    /// The asset uploader reported a failure
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// No stored article under this id
    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    /// The article store reported a failure
    #[error("Article store error: {0}")]
    Store(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EditorError {
    pub fn unknown_block(list: ListKind, id: BlockId) -> Self {
        Self::UnknownBlock { list, id }
    }

    pub fn store(context: impl Into<String>) -> Self {
        Self::Store(context.into())
    }

    pub fn config(context: impl Into<String>) -> Self {
        Self::Config(context.into())
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
