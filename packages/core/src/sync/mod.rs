//! Capture of live control values into the model
//!
//! Controls are stateless views: whatever the user typed lives only in the
//! control until it is captured. `SyncEngine::capture` walks every rendered
//! node in document order and merges its values into the model entry it is
//! bound to, using the same type-dispatch rule as `update_at`.
//!
//! Capture must run before every structural mutation. After a move or removal
//! the tree is rebuilt from the model, so anything not captured first is gone.
//!
//! Every node is handled on its own:
//!
//! - a node whose entry no longer exists is skipped (`stale`)
//! - a node whose kind disagrees with its entry is skipped (`mismatched`)
//! - a missing optional field only leaves that field out of the patch

use crate::models::{ContentBlock, GalleryImage};
use crate::render::{ControlKind, ControlNode, ControlTree};
use crate::sequence::{OrderedSequence, Patchable};

/// Model items that can be refreshed from a control node
pub trait Capturable: Patchable {
    /// Whether `node` was rendered for an item of this shape
    fn accepts(&self, node: &ControlNode) -> bool;

    /// Current values of `node` as a patch
    fn read_patch(node: &ControlNode) -> Self::Patch;
}

impl Capturable for ContentBlock {
    fn accepts(&self, node: &ControlNode) -> bool {
        node.kind() == ControlKind::Block(self.kind())
    }

    fn read_patch(node: &ControlNode) -> Self::Patch {
        node.read_block_patch()
    }
}

impl Capturable for GalleryImage {
    fn accepts(&self, node: &ControlNode) -> bool {
        node.kind() == ControlKind::GalleryImage
    }

    fn read_patch(node: &ControlNode) -> Self::Patch {
        node.read_gallery_patch()
    }
}

/// Counters from one capture pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureReport {
    /// Nodes walked
    pub visited: usize,
    /// Entries whose stored values changed
    pub updated: usize,
    /// Nodes bound to an entry that no longer exists
    pub stale: usize,
    /// Nodes whose kind disagrees with their entry
    pub mismatched: usize,
}

impl CaptureReport {
    pub fn merge(self, other: CaptureReport) -> CaptureReport {
        CaptureReport {
            visited: self.visited + other.visited,
            updated: self.updated + other.updated,
            stale: self.stale + other.stale,
            mismatched: self.mismatched + other.mismatched,
        }
    }
}

/// Copies control values back into an ordered model
pub struct SyncEngine;

impl SyncEngine {
    /// Capture every node of `tree` into `model`
    pub fn capture<T, C>(tree: &C, model: &mut OrderedSequence<T>) -> CaptureReport
    where
        T: Capturable,
        C: ControlTree + ?Sized,
    {
        let mut report = CaptureReport::default();

        for node in tree.nodes() {
            report.visited += 1;
            let id = node.block_id();

            let Some(index) = model.position_of(id) else {
                tracing::debug!(
                    "Skipping capture for block {} (index attribute {}): no longer in model",
                    id,
                    node.index_attribute()
                );
                report.stale += 1;
                continue;
            };

            if index != node.index_attribute() {
                tracing::trace!(
                    "Block {} rendered at {} is now at {}",
                    id,
                    node.index_attribute(),
                    index
                );
            }

            if !model.get(index).is_some_and(|item| item.accepts(node)) {
                tracing::warn!("Skipping capture for block {}: control kind mismatch", id);
                report.mismatched += 1;
                continue;
            }

            if model.update_at(index, &T::read_patch(node)).is_applied() {
                report.updated += 1;
            }
        }

        tracing::debug!(
            "Captured {} controls ({} updated, {} stale, {} mismatched)",
            report.visited,
            report.updated,
            report.stale,
            report.mismatched
        );
        report
    }
}
