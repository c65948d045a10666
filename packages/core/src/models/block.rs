//! Content Block Data Structures
//!
//! This module defines the typed content blocks that make up an article body.
//!
//! # Architecture
//!
//! - **Tagged union**: `ContentBlock` is discriminated by `type` on the wire
//! - **Closed field sets**: each variant carries exactly the fields of its type,
//!   so a field declared for one type can never be stored on another
//! - **Lenient loading**: missing or malformed fields fall back to `""` / `false`
//!
//! # Examples
//!
//! ```rust
//! use article_editor_core::models::{BlockKind, BlockPatch, ContentBlock};
//!
//! let mut block = ContentBlock::empty(BlockKind::Quote);
//! block.apply_patch(&BlockPatch::default().with_content("Stay hungry").with_author("S. Brand"));
//!
//! assert_eq!(block.kind(), BlockKind::Quote);
//! assert_eq!(block.content(), Some("Stay hungry"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for block and gallery payloads that cannot be defaulted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid block type: {0}")]
    InvalidBlockType(String),

    #[error("Expected a JSON object, got {0}")]
    NotAnObject(String),
}

/// Stable identity of one entry in an ordered sequence
///
/// Assigned when the entry is created and never reused. Position in the
/// sequence may change any number of times; the id does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Discriminant of a [`ContentBlock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Paragraph,
    Heading,
    Image,
    Video,
    Quote,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Paragraph,
        BlockKind::Heading,
        BlockKind::Image,
        BlockKind::Video,
        BlockKind::Quote,
    ];

    /// Wire name of the kind (the value of the `type` tag)
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::Image => "image",
            BlockKind::Video => "video",
            BlockKind::Quote => "quote",
        }
    }

    /// Parse a wire name
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBlockType` for anything outside the five known kinds.
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ValidationError::InvalidBlockType(name.to_string()))
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of an article body.
///
/// # Wire format
///
/// Internally tagged by `type`, flat:
///
/// ```json
/// {"type":"paragraph","content":"Opening line","lead":true}
/// {"type":"image","url":"https://cdn/x.jpg","caption":"Harbour at dawn"}
/// ```
///
/// Deserialization goes through [`ContentBlock::from_value`], which drops keys
/// that do not belong to the block's type and defaults missing ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", try_from = "Value")]
pub enum ContentBlock {
    Paragraph { content: String, lead: bool },
    Heading { content: String },
    Image { url: String, caption: String },
    Video { url: String, caption: String },
    Quote { content: String, author: String },
}

impl ContentBlock {
    /// Create a block of the given kind with every field at its default
    pub fn empty(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Paragraph => ContentBlock::Paragraph {
                content: String::new(),
                lead: false,
            },
            BlockKind::Heading => ContentBlock::Heading {
                content: String::new(),
            },
            BlockKind::Image => ContentBlock::Image {
                url: String::new(),
                caption: String::new(),
            },
            BlockKind::Video => ContentBlock::Video {
                url: String::new(),
                caption: String::new(),
            },
            BlockKind::Quote => ContentBlock::Quote {
                content: String::new(),
                author: String::new(),
            },
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            content: content.into(),
            lead: false,
        }
    }

    pub fn heading(content: impl Into<String>) -> Self {
        ContentBlock::Heading {
            content: content.into(),
        }
    }

    pub fn image(url: impl Into<String>, caption: impl Into<String>) -> Self {
        ContentBlock::Image {
            url: url.into(),
            caption: caption.into(),
        }
    }

    pub fn video(url: impl Into<String>, caption: impl Into<String>) -> Self {
        ContentBlock::Video {
            url: url.into(),
            caption: caption.into(),
        }
    }

    pub fn quote(content: impl Into<String>, author: impl Into<String>) -> Self {
        ContentBlock::Quote {
            content: content.into(),
            author: author.into(),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Paragraph { .. } => BlockKind::Paragraph,
            ContentBlock::Heading { .. } => BlockKind::Heading,
            ContentBlock::Image { .. } => BlockKind::Image,
            ContentBlock::Video { .. } => BlockKind::Video,
            ContentBlock::Quote { .. } => BlockKind::Quote,
        }
    }

    /// Text content, for the kinds that have one
    pub fn content(&self) -> Option<&str> {
        match self {
            ContentBlock::Paragraph { content, .. }
            | ContentBlock::Heading { content }
            | ContentBlock::Quote { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Asset URL, for image and video blocks
    pub fn url(&self) -> Option<&str> {
        match self {
            ContentBlock::Image { url, .. } | ContentBlock::Video { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Merge a partial field set into this block.
    ///
    /// Only fields declared for this block's kind are merged; the rest of the
    /// patch is ignored. The kind itself never changes. Returns `true` when at
    /// least one stored value changed.
    pub fn apply_patch(&mut self, patch: &BlockPatch) -> bool {
        let mut changed = false;
        match self {
            ContentBlock::Paragraph { content, lead } => {
                changed |= merge(content, &patch.content);
                changed |= merge(lead, &patch.lead);
            }
            ContentBlock::Heading { content } => {
                changed |= merge(content, &patch.content);
            }
            ContentBlock::Image { url, caption } | ContentBlock::Video { url, caption } => {
                changed |= merge(url, &patch.url);
                changed |= merge(caption, &patch.caption);
            }
            ContentBlock::Quote { content, author } => {
                changed |= merge(content, &patch.content);
                changed |= merge(author, &patch.author);
            }
        }
        changed
    }

    /// Build a block from an arbitrary JSON value.
    ///
    /// The `type` tag is required. Every other field is optional: strings
    /// default to `""`, `lead` defaults to `false`, scalars of the wrong JSON
    /// type are coerced where the meaning is obvious.
    ///
    /// # Errors
    ///
    /// - `ValidationError::NotAnObject` if `value` is not a JSON object
    /// - `ValidationError::MissingField` if there is no string `type`
    /// - `ValidationError::InvalidBlockType` for an unknown `type`
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::NotAnObject(json_kind(value).to_string()))?;
        let kind = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ValidationError::MissingField("type".to_string()))?;
        let kind = BlockKind::parse(kind)?;

        let text = |key: &str| lenient_text(object.get(key));
        Ok(match kind {
            BlockKind::Paragraph => ContentBlock::Paragraph {
                content: text("content"),
                lead: lenient_flag(object.get("lead")),
            },
            BlockKind::Heading => ContentBlock::Heading {
                content: text("content"),
            },
            BlockKind::Image => ContentBlock::Image {
                url: text("url"),
                caption: text("caption"),
            },
            BlockKind::Video => ContentBlock::Video {
                url: text("url"),
                caption: text("caption"),
            },
            BlockKind::Quote => ContentBlock::Quote {
                content: text("content"),
                author: text("author"),
            },
        })
    }
}

impl TryFrom<Value> for ContentBlock {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        ContentBlock::from_value(&value)
    }
}

/// Partial field set for [`ContentBlock::apply_patch`]
///
/// Carries every field any block kind can have; which ones take effect is
/// decided by the target block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl BlockPatch {
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_lead(mut self, lead: bool) -> Self {
        self.lead = Some(lead);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &BlockPatch::default()
    }
}

/// Overwrite `slot` with `value` if present and different
pub(crate) fn merge<T: PartialEq + Clone>(slot: &mut T, value: &Option<T>) -> bool {
    match value {
        Some(v) if slot != v => {
            *slot = v.clone();
            true
        }
        _ => false,
    }
}

pub(crate) fn lenient_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

pub(crate) fn lenient_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        // checkbox-style values
        Some(Value::String(s)) => matches!(s.as_str(), "true" | "on" | "1"),
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
