//! Gallery image entries
//!
//! The gallery is a flat list of images shown alongside the article body. It
//! shares the ordering rules of the body but none of its typing.

use crate::models::block::{json_kind, lenient_text, merge, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One image reference in an article gallery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
}

impl GalleryImage {
    pub fn new(url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: caption.into(),
        }
    }

    /// Merge a partial field set, returning `true` when something changed
    pub fn apply_patch(&mut self, patch: &GalleryPatch) -> bool {
        let mut changed = merge(&mut self.url, &patch.url);
        changed |= merge(&mut self.caption, &patch.caption);
        changed
    }

    /// Build an image from an arbitrary JSON value, defaulting missing fields
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotAnObject` if `value` is not a JSON object.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::NotAnObject(json_kind(value).to_string()))?;

        Ok(Self {
            url: lenient_text(object.get("url")),
            caption: lenient_text(object.get("caption")),
        })
    }
}

impl TryFrom<Value> for GalleryImage {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        GalleryImage::from_value(&value)
    }
}

/// Partial field set for [`GalleryImage::apply_patch`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl GalleryPatch {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}
