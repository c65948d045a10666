//! Editor configuration
//!
//! Every field has a serde default so partial or older config files load
//! without error.

use crate::error::{EditorError, Result};
use crate::render::RenderPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_MAX_BLOCKS: usize = 500;
const DEFAULT_MAX_GALLERY_IMAGES: usize = 100;
const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 64;

/// Settings for one section editor session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Disable move-down on the last control, mirroring move-up on the first
    #[serde(default = "default_true")]
    pub disable_move_down_at_end: bool,

    /// Appends beyond this many body blocks are ignored
    #[serde(default = "default_max_blocks")]
    pub max_blocks: usize,

    /// Appends beyond this many gallery images are ignored
    #[serde(default = "default_max_gallery_images")]
    pub max_gallery_images: usize,

    /// Buffer size of the editor event channel
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            disable_move_down_at_end: true,
            max_blocks: DEFAULT_MAX_BLOCKS,
            max_gallery_images: DEFAULT_MAX_GALLERY_IMAGES,
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_blocks() -> usize {
    DEFAULT_MAX_BLOCKS
}

fn default_max_gallery_images() -> usize {
    DEFAULT_MAX_GALLERY_IMAGES
}

fn default_event_channel_capacity() -> usize {
    DEFAULT_EVENT_CHANNEL_CAPACITY
}

impl EditorConfig {
    /// Parse a JSON config document and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    ///
    /// # Returns
    /// * `Ok(EditorConfig)` - Loaded config, or defaults if the file doesn't exist
    /// * `Err(EditorError)` - The file could not be read, parsed or validated
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No editor config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_blocks == 0 {
            return Err(EditorError::config("maxBlocks must be greater than 0"));
        }

        if self.max_gallery_images == 0 {
            return Err(EditorError::config("maxGalleryImages must be greater than 0"));
        }

        if self.event_channel_capacity == 0 {
            return Err(EditorError::config("eventChannelCapacity must be greater than 0"));
        }

        Ok(())
    }

    pub fn render_policy(&self) -> RenderPolicy {
        RenderPolicy {
            disable_move_down_at_end: self.disable_move_down_at_end,
        }
    }
}
