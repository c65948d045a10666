//! Editor Events
//!
//! Events emitted by a `SectionEditor` whenever its models or control trees
//! change. They follow the observer pattern: hosts subscribe through
//! `SectionEditor::subscribe` and react (autosave, preview refresh, analytics)
//! without coupling to the editor internals.
//!
//! Events are delivered over a tokio broadcast channel, so several subscribers
//! can listen at once. Sending never blocks the editor; with no subscriber the
//! event is discarded.

use crate::editor::ListKind;
use crate::models::BlockId;
use crate::render::FieldSelector;
use serde::{Deserialize, Serialize};

/// Change notifications from an editor session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditorEvent {
    /// An entry was appended at `index`
    BlockAppended {
        list: ListKind,
        id: BlockId,
        index: usize,
    },

    /// An entry swapped places with a neighbour
    BlockMoved {
        list: ListKind,
        id: BlockId,
        from: usize,
        to: usize,
    },

    /// An entry was removed from `index`
    BlockRemoved {
        list: ListKind,
        id: BlockId,
        index: usize,
    },

    /// A control tree was regenerated from its model
    Rebuilt {
        list: ListKind,
        generation: u64,
        len: usize,
    },

    /// An upload URL landed in the block's current control
    UploadApplied {
        list: ListKind,
        id: BlockId,
        selector: FieldSelector,
    },

    /// An upload finished after its block was removed
    UploadDropped {
        list: ListKind,
        id: BlockId,
        selector: FieldSelector,
    },
}

impl EditorEvent {
    /// Get a string representation of the event type
    pub fn event_type(&self) -> &str {
        match self {
            EditorEvent::BlockAppended { .. } => "block:appended",
            EditorEvent::BlockMoved { .. } => "block:moved",
            EditorEvent::BlockRemoved { .. } => "block:removed",
            EditorEvent::Rebuilt { .. } => "tree:rebuilt",
            EditorEvent::UploadApplied { .. } => "upload:applied",
            EditorEvent::UploadDropped { .. } => "upload:dropped",
        }
    }

    pub fn list(&self) -> ListKind {
        match self {
            EditorEvent::BlockAppended { list, .. }
            | EditorEvent::BlockMoved { list, .. }
            | EditorEvent::BlockRemoved { list, .. }
            | EditorEvent::Rebuilt { list, .. }
            | EditorEvent::UploadApplied { list, .. }
            | EditorEvent::UploadDropped { list, .. } => *list,
        }
    }
}
