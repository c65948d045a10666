//! Upload targets
//!
//! An upload resolves some time after it was started, possibly after the
//! block it belongs to has moved or been removed. The target therefore names
//! the block by id, never by position, and is resolved against whatever
//! control is bound to that id when the URL arrives.
//!
//! Transfers never borrow the editor. `UploadTarget::upload` awaits the
//! uploader on its own; the session stays free for edits and moves until the
//! URL is handed to `SectionEditor::accept_upload`.

use crate::editor::ListKind;
use crate::error::{EditorError, Result};
use crate::models::BlockId;
use crate::render::FieldSelector;
use crate::services::{AssetFile, AssetUploader};

/// Field an in-flight upload will write its URL into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTarget {
    pub list: ListKind,
    pub block_id: BlockId,
    pub selector: FieldSelector,
    /// Tree generation when the upload started; compared on delivery to
    /// report whether the list was rebuilt in between
    pub generation: u64,
}

impl UploadTarget {
    /// Send `file` through `uploader` and return the stored asset's URL
    ///
    /// # Errors
    ///
    /// Returns `EditorError::UploadFailed` if the uploader fails.
    pub async fn upload<U>(&self, uploader: &U, file: AssetFile) -> Result<String>
    where
        U: AssetUploader + ?Sized,
    {
        let name = file.name.clone();
        uploader.upload(file).await.map_err(|e| {
            tracing::warn!("Upload of '{}' for block {} failed: {}", name, self.block_id, e);
            EditorError::UploadFailed(e.to_string())
        })
    }
}

/// What happened to a completed upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// URL written into the block, now at `index`; `rebuilt` is set when the
    /// list was re-rendered after the upload started
    Applied { index: usize, rebuilt: bool },
    /// The block no longer exists; nothing was touched
    Dropped,
    /// The URL was empty; nothing was touched
    Rejected,
}

impl UploadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, UploadOutcome::Applied { .. })
    }
}
