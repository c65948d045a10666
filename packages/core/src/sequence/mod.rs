//! Ordered Sequences
//!
//! `OrderedSequence<T>` is the index-addressed, contiguous, 0-based list behind
//! both the article body (`ContentModel`) and the gallery (`GalleryModel`).
//!
//! Every entry carries a [`BlockId`] assigned on insertion. Positions change on
//! every move or removal; ids never do, so callers that must find "the same
//! block" after a structural mutation look it up by id with
//! [`OrderedSequence::position_of`].
//!
//! Structural operations never fail. A boundary move or an out-of-range index
//! leaves the sequence untouched and reports [`MutationOutcome::NoOp`].
//!
//! # Examples
//!
//! ```rust
//! use article_editor_core::models::ContentBlock;
//! use article_editor_core::sequence::{ContentModel, MutationOutcome};
//!
//! let mut model = ContentModel::new();
//! model.append(ContentBlock::heading("A"));
//! model.append(ContentBlock::heading("B"));
//!
//! assert_eq!(model.move_up(0), MutationOutcome::NoOp);
//! assert_eq!(model.move_down(0), MutationOutcome::Applied);
//! assert_eq!(model.get(0), Some(&ContentBlock::heading("B")));
//! ```

use crate::models::{BlockId, BlockPatch, ContentBlock, GalleryImage, GalleryPatch};

/// Article body: ordered content blocks
pub type ContentModel = OrderedSequence<ContentBlock>;

/// Article gallery: ordered images
pub type GalleryModel = OrderedSequence<GalleryImage>;

/// Items that accept a partial field set
pub trait Patchable {
    type Patch;

    /// Merge `patch` into `self`, returning `true` if a stored value changed
    fn apply_patch(&mut self, patch: &Self::Patch) -> bool;
}

impl Patchable for ContentBlock {
    type Patch = BlockPatch;

    fn apply_patch(&mut self, patch: &BlockPatch) -> bool {
        ContentBlock::apply_patch(self, patch)
    }
}

impl Patchable for GalleryImage {
    type Patch = GalleryPatch;

    fn apply_patch(&mut self, patch: &GalleryPatch) -> bool {
        GalleryImage::apply_patch(self, patch)
    }
}

/// Result of a sequence mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The sequence changed
    Applied,
    /// Boundary, out-of-range or unchanged: nothing was touched
    NoOp,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }

    fn from_changed(changed: bool) -> Self {
        if changed {
            MutationOutcome::Applied
        } else {
            MutationOutcome::NoOp
        }
    }
}

/// One element of an [`OrderedSequence`] with its stable id
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    pub id: BlockId,
    pub item: T,
}

/// Index-addressed ordered list with stable per-entry ids
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedSequence<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for OrderedSequence<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> OrderedSequence<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a sequence from saved items, in order, assigning fresh ids
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            entries: items
                .into_iter()
                .map(|item| Entry {
                    id: BlockId::new(),
                    item,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at the end, returning the new entry's id
    pub fn append(&mut self, item: T) -> BlockId {
        let id = BlockId::new();
        self.entries.push(Entry { id, item });
        id
    }

    /// Swap the entry at `index` with its predecessor
    pub fn move_up(&mut self, index: usize) -> MutationOutcome {
        if index == 0 || index >= self.entries.len() {
            return MutationOutcome::NoOp;
        }
        self.entries.swap(index - 1, index);
        MutationOutcome::Applied
    }

    /// Swap the entry at `index` with its successor
    pub fn move_down(&mut self, index: usize) -> MutationOutcome {
        if index >= self.entries.len() || index + 1 == self.entries.len() {
            return MutationOutcome::NoOp;
        }
        self.entries.swap(index, index + 1);
        MutationOutcome::Applied
    }

    /// Delete the entry at `index`, shifting later entries left by one
    pub fn remove_at(&mut self, index: usize) -> MutationOutcome {
        if index >= self.entries.len() {
            return MutationOutcome::NoOp;
        }
        self.entries.remove(index);
        MutationOutcome::Applied
    }

    /// Current position of the entry with this id
    pub fn position_of(&self, id: BlockId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|entry| &entry.item)
    }

    pub fn get_by_id(&self, id: BlockId) -> Option<&T> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.item)
    }

    pub fn id_at(&self, index: usize) -> Option<BlockId> {
        self.entries.get(index).map(|entry| entry.id)
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.item)
    }
}

impl<T: Clone> OrderedSequence<T> {
    /// Plain ordered copy of the items, as persisted
    pub fn items(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Patchable> OrderedSequence<T> {
    /// Merge a partial field set into the entry at `index`
    pub fn update_at(&mut self, index: usize, patch: &T::Patch) -> MutationOutcome {
        match self.entries.get_mut(index) {
            Some(entry) => MutationOutcome::from_changed(entry.item.apply_patch(patch)),
            None => MutationOutcome::NoOp,
        }
    }

    /// Merge a partial field set into the entry with this id
    pub fn update_by_id(&mut self, id: BlockId, patch: &T::Patch) -> MutationOutcome {
        match self.position_of(id) {
            Some(index) => self.update_at(index, patch),
            None => MutationOutcome::NoOp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockKind;
    use serde_json::json;

    fn abc() -> ContentModel {
        ContentModel::from_items(vec![
            ContentBlock::heading("A"),
            ContentBlock::heading("B"),
            ContentBlock::heading("C"),
        ])
    }

    fn contents(model: &ContentModel) -> Vec<&str> {
        model.iter().filter_map(ContentBlock::content).collect()
    }

    #[test]
    fn test_append_grows_by_one_and_keeps_order() {
        let mut model = ContentModel::new();
        for (i, label) in ["one", "two", "three", "four"].iter().enumerate() {
            model.append(ContentBlock::paragraph(*label));
            assert_eq!(model.len(), i + 1);
        }
        assert_eq!(contents(&model), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_move_up_at_first_index_is_noop() {
        let mut model = abc();
        let before = model.clone();

        assert_eq!(model.move_up(0), MutationOutcome::NoOp);
        assert_eq!(model, before);
    }

    #[test]
    fn test_move_down_at_last_index_is_noop() {
        let mut model = abc();
        let before = model.clone();

        assert_eq!(model.move_down(2), MutationOutcome::NoOp);
        assert_eq!(model.move_down(99), MutationOutcome::NoOp);
        assert_eq!(model.move_up(99), MutationOutcome::NoOp);
        assert_eq!(model.move_down(usize::MAX), MutationOutcome::NoOp);
        assert_eq!(model.move_up(usize::MAX), MutationOutcome::NoOp);
        assert_eq!(model.remove_at(usize::MAX), MutationOutcome::NoOp);
        assert_eq!(model, before);
    }

    #[test]
    fn test_reorder_sequence() {
        let mut model = abc();

        assert!(model.move_down(0).is_applied());
        assert_eq!(contents(&model), vec!["B", "A", "C"]);

        assert!(model.move_up(2).is_applied());
        assert_eq!(contents(&model), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut model = abc();

        assert!(model.remove_at(1).is_applied());
        assert_eq!(contents(&model), vec!["A", "C"]);

        assert!(model.move_up(1).is_applied());
        assert_eq!(contents(&model), vec!["C", "A"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut model = abc();
        assert_eq!(model.remove_at(3), MutationOutcome::NoOp);
        assert_eq!(model.len(), 3);

        let mut empty = GalleryModel::new();
        assert_eq!(empty.remove_at(0), MutationOutcome::NoOp);
        assert_eq!(empty.move_down(0), MutationOutcome::NoOp);
    }

    #[test]
    fn test_ids_follow_entries_through_moves() {
        let mut model = abc();
        let a = model.id_at(0).unwrap();
        let c = model.id_at(2).unwrap();

        model.move_down(0);
        model.remove_at(0);

        assert_eq!(model.position_of(a), Some(0));
        assert_eq!(model.position_of(c), Some(1));
        assert_eq!(model.get_by_id(c), Some(&ContentBlock::heading("C")));
    }

    #[test]
    fn test_update_at_ignores_fields_of_other_types() {
        let mut model = ContentModel::new();
        model.append(ContentBlock::empty(BlockKind::Paragraph));

        let patch = BlockPatch::default().with_content("text").with_author("Ann");
        assert!(model.update_at(0, &patch).is_applied());

        let stored = serde_json::to_value(model.get(0).unwrap()).unwrap();
        assert_eq!(stored, json!({"type": "paragraph", "content": "text", "lead": false}));
        assert!(stored.get("author").is_none());
    }

    #[test]
    fn test_update_out_of_range_or_unknown_id_is_noop() {
        let mut model = abc();
        let patch = BlockPatch::default().with_content("Z");

        assert_eq!(model.update_at(3, &patch), MutationOutcome::NoOp);
        assert_eq!(model.update_by_id(BlockId::new(), &patch), MutationOutcome::NoOp);
        assert_eq!(contents(&model), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_gallery_model_is_independent() {
        let mut gallery = GalleryModel::new();
        let first = gallery.append(GalleryImage::new("1.jpg", ""));
        gallery.append(GalleryImage::new("2.jpg", ""));

        gallery.move_down(0);
        gallery.update_by_id(first, &GalleryPatch::default().with_caption("moved"));

        assert_eq!(
            gallery.items(),
            vec![GalleryImage::new("2.jpg", ""), GalleryImage::new("1.jpg", "moved")]
        );
    }
}
