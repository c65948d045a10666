//! Rendering
//!
//! - `control` - `ControlNode`, `FieldSelector`, `FieldValue`
//! - `tree` - the `ControlTree` host seam and `VirtualControlTree`
//! - `blocks` - pure per-type renderers

mod blocks;
mod control;
mod tree;

pub use blocks::{render_block, render_content, render_gallery, render_gallery_image, RenderPolicy};
pub use control::{ControlKind, ControlNode, FieldSelector, FieldValue};
pub use tree::{ControlTree, VirtualControlTree};
