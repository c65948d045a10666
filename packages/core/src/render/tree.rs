//! Control tree abstraction
//!
//! The editor never talks to widgets directly. It mounts freshly rendered
//! [`ControlNode`]s into a `ControlTree` and reads them back in document order
//! when capturing. A UI host implements the trait over its own widget list;
//! [`VirtualControlTree`] is the in-memory implementation used by default.

use crate::models::BlockId;
use crate::render::ControlNode;

/// Ordered container of rendered control nodes for one list
pub trait ControlTree {
    /// Drop every existing node and mount `nodes` in order.
    ///
    /// Implementations must bump [`ControlTree::generation`] on every call so
    /// per-render registrations can tell a rebuilt tree from the one they were
    /// bound to.
    fn mount(&mut self, nodes: Vec<ControlNode>);

    /// All nodes, in document order
    fn nodes(&self) -> &[ControlNode];

    /// Mutable access to the node currently bound to `id`
    fn find_mut(&mut self, id: BlockId) -> Option<&mut ControlNode>;

    /// Number of mounts performed so far
    fn generation(&self) -> u64;

    fn find(&self, id: BlockId) -> Option<&ControlNode> {
        self.nodes().iter().find(|node| node.block_id() == id)
    }

    fn len(&self) -> usize {
        self.nodes().len()
    }

    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }
}

/// In-memory control tree
#[derive(Debug, Clone, Default)]
pub struct VirtualControlTree {
    nodes: Vec<ControlNode>,
    generation: u64,
}

impl VirtualControlTree {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ControlTree for VirtualControlTree {
    fn mount(&mut self, nodes: Vec<ControlNode>) {
        self.nodes = nodes;
        self.generation += 1;
    }

    fn nodes(&self) -> &[ControlNode] {
        &self.nodes
    }

    fn find_mut(&mut self, id: BlockId) -> Option<&mut ControlNode> {
        self.nodes.iter_mut().find(|node| node.block_id() == id)
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
