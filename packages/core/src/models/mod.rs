//! Data Models
//!
//! This module contains the data structures edited by a section editor session:
//!
//! - `ContentBlock` - Typed article body unit (paragraph, heading, image, video, quote)
//! - `GalleryImage` - Flat gallery entry
//! - `ArticleBody` - The two ordered arrays exchanged with the article store
//!
//! Patches (`BlockPatch`, `GalleryPatch`) carry partial field sets that are
//! merged by type dispatch.

mod article;
mod block;
mod gallery;

pub use article::ArticleBody;
pub use block::{BlockId, BlockKind, BlockPatch, ContentBlock, ValidationError};
pub use gallery::{GalleryImage, GalleryPatch};
