//! Section Sequence Editor
//!
//! `SectionEditor` is one editing session over an article: it owns the body
//! (`ContentModel`) and the gallery (`GalleryModel`), one control tree per
//! list, and the orchestration that keeps them consistent.
//!
//! # Action flow
//!
//! Every structural action (append, move up, move down, remove):
//!
//! 1. captures the list's live control values into its model
//! 2. resolves the acting block's current position from its id
//! 3. applies the operation to the model
//! 4. rebuilds the list's control tree from the model
//!
//! Step 1 is what keeps a just-typed value from vanishing when its block
//! moves. Step 2 is why actions carry a `BlockId`: positions go stale after
//! any reorder, ids do not.
//!
//! # Examples
//!
//! ```rust
//! use article_editor_core::config::EditorConfig;
//! use article_editor_core::editor::{ListKind, SectionEditor};
//! use article_editor_core::models::{BlockKind, ContentBlock};
//! use article_editor_core::render::FieldSelector;
//!
//! let mut editor = SectionEditor::new(EditorConfig::default());
//! let first = editor.append_block(BlockKind::Heading).unwrap();
//! let second = editor.append_block(BlockKind::Paragraph).unwrap();
//!
//! editor.edit_field(ListKind::Content, second, FieldSelector::ParagraphContent, "Typed".into());
//! editor.move_up(ListKind::Content, second);
//!
//! let body = editor.snapshot();
//! assert_eq!(body.content[0], ContentBlock::paragraph("Typed"));
//! assert_eq!(editor.content().position_of(first), Some(1));
//! ```

mod events;
mod upload;

pub use events::EditorEvent;
pub use upload::{UploadOutcome, UploadTarget};

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::models::{
    ArticleBody, BlockId, BlockKind, BlockPatch, ContentBlock, GalleryImage, GalleryPatch,
};
use crate::render::{
    render_content, render_gallery, ControlTree, FieldSelector, FieldValue, VirtualControlTree,
};
use crate::sequence::{ContentModel, GalleryModel, MutationOutcome, OrderedSequence};
use crate::sync::{CaptureReport, SyncEngine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

/// Which of the two ordered lists an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Content,
    Gallery,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Content => f.write_str("content"),
            ListKind::Gallery => f.write_str("gallery"),
        }
    }
}

/// User actions a host can dispatch through [`SectionEditor::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    AppendBlock(BlockKind),
    AppendGalleryImage,
    MoveUp { list: ListKind, id: BlockId },
    MoveDown { list: ListKind, id: BlockId },
    Remove { list: ListKind, id: BlockId },
}

#[derive(Debug, Clone, Copy)]
enum StructuralOp {
    MoveUp,
    MoveDown,
    Remove,
}

impl StructuralOp {
    fn apply<T>(self, sequence: &mut OrderedSequence<T>, index: usize) -> MutationOutcome {
        match self {
            StructuralOp::MoveUp => sequence.move_up(index),
            StructuralOp::MoveDown => sequence.move_down(index),
            StructuralOp::Remove => sequence.remove_at(index),
        }
    }

    fn event(self, list: ListKind, id: BlockId, index: usize) -> EditorEvent {
        match self {
            StructuralOp::MoveUp => EditorEvent::BlockMoved {
                list,
                id,
                from: index,
                to: index - 1,
            },
            StructuralOp::MoveDown => EditorEvent::BlockMoved {
                list,
                id,
                from: index,
                to: index + 1,
            },
            StructuralOp::Remove => EditorEvent::BlockRemoved { list, id, index },
        }
    }
}

/// One editing session over an article body and gallery
pub struct SectionEditor<T: ControlTree = VirtualControlTree> {
    config: EditorConfig,
    content: ContentModel,
    gallery: GalleryModel,
    content_tree: T,
    gallery_tree: T,
    events: broadcast::Sender<EditorEvent>,
    modified_at: Option<DateTime<Utc>>,
    dirty: bool,
}

impl SectionEditor<VirtualControlTree> {
    /// Start an empty session
    pub fn new(config: EditorConfig) -> Self {
        Self::open(ArticleBody::default(), config)
    }

    /// Start a session seeded from a saved article
    pub fn open(body: ArticleBody, config: EditorConfig) -> Self {
        Self::with_trees(body, config, VirtualControlTree::new(), VirtualControlTree::new())
    }
}

impl<T: ControlTree> SectionEditor<T> {
    /// Start a session rendering into host-provided control trees
    pub fn with_trees(
        body: ArticleBody,
        config: EditorConfig,
        content_tree: T,
        gallery_tree: T,
    ) -> Self {
        let (events, _) = broadcast::channel(config.event_channel_capacity.max(1));
        let mut editor = Self {
            content: ContentModel::from_items(body.content),
            gallery: GalleryModel::from_items(body.gallery),
            config,
            content_tree,
            gallery_tree,
            events,
            modified_at: None,
            dirty: false,
        };

        tracing::debug!(
            "Opened editor session with {} blocks and {} gallery images",
            editor.content.len(),
            editor.gallery.len()
        );
        editor.rebuild(ListKind::Content);
        editor.rebuild(ListKind::Gallery);
        editor
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentModel {
        &self.content
    }

    pub fn gallery(&self) -> &GalleryModel {
        &self.gallery
    }

    pub fn content_tree(&self) -> &T {
        &self.content_tree
    }

    pub fn gallery_tree(&self) -> &T {
        &self.gallery_tree
    }

    pub fn tree(&self, list: ListKind) -> &T {
        match list {
            ListKind::Content => &self.content_tree,
            ListKind::Gallery => &self.gallery_tree,
        }
    }

    fn tree_mut(&mut self, list: ListKind) -> &mut T {
        match list {
            ListKind::Content => &mut self.content_tree,
            ListKind::Gallery => &mut self.gallery_tree,
        }
    }

    /// Whether anything changed since the session opened or was last saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    /// Record that the current state has been persisted
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Receive every event emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.events.subscribe()
    }

    /// Id of the live control whose index attribute is `index`
    ///
    /// For hosts whose widgets only know their rendered index. The lookup
    /// reads the tree as it is now, so it must happen when the action fires.
    pub fn block_at_index(&self, list: ListKind, index: usize) -> Option<BlockId> {
        self.tree(list)
            .nodes()
            .iter()
            .find(|node| node.index_attribute() == index)
            .map(|node| node.block_id())
    }

    /// Dispatch a user action
    pub fn apply(&mut self, action: EditorAction) -> MutationOutcome {
        match action {
            EditorAction::AppendBlock(kind) => outcome_of(self.append_block(kind)),
            EditorAction::AppendGalleryImage => {
                outcome_of(self.append_gallery_image(GalleryImage::default()))
            }
            EditorAction::MoveUp { list, id } => self.move_up(list, id),
            EditorAction::MoveDown { list, id } => self.move_down(list, id),
            EditorAction::Remove { list, id } => self.remove(list, id),
        }
    }

    /// Append an empty block of `kind` to the body
    pub fn append_block(&mut self, kind: BlockKind) -> Option<BlockId> {
        self.append_content(ContentBlock::empty(kind))
    }

    /// Append a prepared block to the body
    ///
    /// Returns `None` when the body is already at `max_blocks`.
    pub fn append_content(&mut self, block: ContentBlock) -> Option<BlockId> {
        if self.content.len() >= self.config.max_blocks {
            tracing::warn!(
                "Ignoring append: body already has {} blocks (limit {})",
                self.content.len(),
                self.config.max_blocks
            );
            return None;
        }

        self.capture_list(ListKind::Content);
        let id = self.content.append(block);
        let index = self.content.len() - 1;
        self.record(EditorEvent::BlockAppended {
            list: ListKind::Content,
            id,
            index,
        });
        self.rebuild(ListKind::Content);
        Some(id)
    }

    /// Append an image to the gallery
    ///
    /// Returns `None` when the gallery is already at `max_gallery_images`.
    pub fn append_gallery_image(&mut self, image: GalleryImage) -> Option<BlockId> {
        if self.gallery.len() >= self.config.max_gallery_images {
            tracing::warn!(
                "Ignoring append: gallery already has {} images (limit {})",
                self.gallery.len(),
                self.config.max_gallery_images
            );
            return None;
        }

        self.capture_list(ListKind::Gallery);
        let id = self.gallery.append(image);
        let index = self.gallery.len() - 1;
        self.record(EditorEvent::BlockAppended {
            list: ListKind::Gallery,
            id,
            index,
        });
        self.rebuild(ListKind::Gallery);
        Some(id)
    }

    pub fn move_up(&mut self, list: ListKind, id: BlockId) -> MutationOutcome {
        self.structural(list, id, StructuralOp::MoveUp)
    }

    pub fn move_down(&mut self, list: ListKind, id: BlockId) -> MutationOutcome {
        self.structural(list, id, StructuralOp::MoveDown)
    }

    pub fn remove(&mut self, list: ListKind, id: BlockId) -> MutationOutcome {
        self.structural(list, id, StructuralOp::Remove)
    }

    /// Type into a control, as the user would.
    ///
    /// Only the control changes; the model picks the value up on the next
    /// capture. Returns `false` if there is no such control or field.
    pub fn edit_field(
        &mut self,
        list: ListKind,
        id: BlockId,
        selector: FieldSelector,
        value: FieldValue,
    ) -> bool {
        let edited = self
            .tree_mut(list)
            .find_mut(id)
            .is_some_and(|node| node.set_field(selector, value));

        if edited {
            self.touch();
        }
        edited
    }

    /// Capture both control trees into their models
    pub fn capture(&mut self) -> CaptureReport {
        let content = self.capture_list(ListKind::Content);
        let gallery = self.capture_list(ListKind::Gallery);
        content.merge(gallery)
    }

    /// Capture, then return the plain ordered arrays to persist
    pub fn snapshot(&mut self) -> ArticleBody {
        self.capture();
        ArticleBody::new(self.content.items(), self.gallery.items())
    }

    /// End the session, returning its final body
    pub fn into_body(mut self) -> ArticleBody {
        self.snapshot()
    }

    /// Register an upload into `selector` of block `id`
    ///
    /// # Errors
    ///
    /// - `EditorError::NotUploadable` if the field does not take an asset URL
    ///   or the block has no such field
    /// - `EditorError::UnknownBlock` if no control is bound to `id`
    pub fn upload_target(
        &self,
        list: ListKind,
        id: BlockId,
        selector: FieldSelector,
    ) -> Result<UploadTarget> {
        if !selector.is_upload_target() {
            return Err(EditorError::NotUploadable { id, selector });
        }

        let tree = self.tree(list);
        let node = tree
            .find(id)
            .ok_or_else(|| EditorError::unknown_block(list, id))?;
        if node.field(selector).is_none() {
            return Err(EditorError::NotUploadable { id, selector });
        }

        Ok(UploadTarget {
            list,
            block_id: id,
            selector,
            generation: tree.generation(),
        })
    }

    /// Deliver a finished upload.
    ///
    /// The URL goes into whatever control is bound to the target block now,
    /// wherever rebuilds have moved it. If the block is gone the URL is
    /// dropped without touching anything else.
    pub fn accept_upload(&mut self, target: UploadTarget, url: impl Into<String>) -> UploadOutcome {
        let url = url.into();
        let UploadTarget {
            list,
            block_id: id,
            selector,
            generation,
        } = target;

        if url.trim().is_empty() {
            tracing::warn!("Rejecting empty upload URL for block {}", id);
            return UploadOutcome::Rejected;
        }

        let current_generation = self.tree(list).generation();
        let written = self
            .tree_mut(list)
            .find_mut(id)
            .is_some_and(|node| node.set_field(selector, FieldValue::Text(url.clone())));

        let index = match (written, self.position_of(list, id)) {
            (true, Some(index)) => index,
            _ => {
                tracing::debug!(
                    "Dropping upload for block {} (started at generation {}, now {})",
                    id,
                    generation,
                    current_generation
                );
                self.emit(EditorEvent::UploadDropped { list, id, selector });
                return UploadOutcome::Dropped;
            }
        };

        match list {
            ListKind::Content => self
                .content
                .update_by_id(id, &BlockPatch::default().with_url(url)),
            ListKind::Gallery => self
                .gallery
                .update_by_id(id, &GalleryPatch::default().with_url(url)),
        };

        self.record(EditorEvent::UploadApplied { list, id, selector });
        UploadOutcome::Applied {
            index,
            rebuilt: generation != current_generation,
        }
    }

    fn position_of(&self, list: ListKind, id: BlockId) -> Option<usize> {
        match list {
            ListKind::Content => self.content.position_of(id),
            ListKind::Gallery => self.gallery.position_of(id),
        }
    }

    fn structural(&mut self, list: ListKind, id: BlockId, op: StructuralOp) -> MutationOutcome {
        self.capture_list(list);

        let outcome = match self.position_of(list, id) {
            Some(index) => {
                if let Some(node) = self.tree(list).find(id) {
                    if node.index_attribute() != index {
                        tracing::trace!(
                            "Block {} index attribute {} differs from position {}",
                            id,
                            node.index_attribute(),
                            index
                        );
                    }
                }

                let outcome = match list {
                    ListKind::Content => op.apply(&mut self.content, index),
                    ListKind::Gallery => op.apply(&mut self.gallery, index),
                };
                if outcome.is_applied() {
                    self.record(op.event(list, id, index));
                } else {
                    tracing::debug!("{:?} on block {} at {} is a no-op", op, id, index);
                }
                outcome
            }
            None => {
                tracing::debug!("{:?} ignored: block {} not in {} list", op, id, list);
                MutationOutcome::NoOp
            }
        };

        self.rebuild(list);
        outcome
    }

    fn capture_list(&mut self, list: ListKind) -> CaptureReport {
        match list {
            ListKind::Content => SyncEngine::capture(&self.content_tree, &mut self.content),
            ListKind::Gallery => SyncEngine::capture(&self.gallery_tree, &mut self.gallery),
        }
    }

    fn rebuild(&mut self, list: ListKind) {
        let policy = self.config.render_policy();
        let (nodes, tree) = match list {
            ListKind::Content => (render_content(&self.content, policy), &mut self.content_tree),
            ListKind::Gallery => (render_gallery(&self.gallery, policy), &mut self.gallery_tree),
        };
        tree.mount(nodes);

        let event = EditorEvent::Rebuilt {
            list,
            generation: tree.generation(),
            len: tree.len(),
        };
        self.emit(event);
    }

    /// Mark the session modified and emit `event`
    fn record(&mut self, event: EditorEvent) {
        self.touch();
        self.emit(event);
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.modified_at = Some(Utc::now());
    }

    fn emit(&self, event: EditorEvent) {
        tracing::trace!("Editor event {}", event.event_type());
        // no subscribers is fine
        let _ = self.events.send(event);
    }
}

fn outcome_of(appended: Option<BlockId>) -> MutationOutcome {
    if appended.is_some() {
        MutationOutcome::Applied
    } else {
        MutationOutcome::NoOp
    }
}
