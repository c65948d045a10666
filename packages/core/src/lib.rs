//! Article Section Editor Core
//!
//! This crate provides the editing core for composing an article body out of
//! typed content blocks, plus a parallel ordered gallery, with live
//! synchronisation between the in-memory models and the editable controls a
//! host renders for them.
//!
//! # Architecture
//!
//! - **Model as single source of truth**: controls are stateless views that are
//!   thrown away and rebuilt after every structural change
//! - **Capture before mutate**: live control values are written back into the
//!   model before any append, move or removal
//! - **Stable identity**: every entry carries a `BlockId`, so actions and
//!   uploads find their block after any reorder
//! - **Host-agnostic controls**: hosts implement `ControlTree` over their widgets
//!
//! # Modules
//!
//! - [`models`] - Content blocks, gallery images, article body shape
//! - [`sequence`] - Ordered, id-stable sequences (`ContentModel`, `GalleryModel`)
//! - [`render`] - Control nodes, selector contract, block renderers
//! - [`sync`] - Capture of control values into models
//! - [`editor`] - The editing session and action orchestration
//! - [`services`] - Article store and asset uploader contracts
//! - [`config`] - Editor configuration
//! - [`error`] - Error types
//! - [`logging`] - Tracing setup

pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod sequence;
pub mod services;
pub mod sync;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editor::{EditorAction, EditorEvent, ListKind, SectionEditor, UploadOutcome, UploadTarget};
pub use error::{EditorError, Result};
pub use models::*;
pub use sequence::{ContentModel, GalleryModel, MutationOutcome};
pub use sync::{CaptureReport, SyncEngine};
