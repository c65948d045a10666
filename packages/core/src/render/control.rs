//! Rendered control nodes and the selector contract
//!
//! A `ControlNode` is the editable view of one sequence entry. It holds the
//! live field values (which may be ahead of the model until captured), the
//! entry's stable id, and the index attribute written at render time.

use crate::models::{BlockId, BlockKind, BlockPatch, GalleryPatch};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector contract for editable fields
///
/// Each block kind exposes a fixed set of selectors; `as_str` is the class
/// name a host attaches to the widget so values can be located
/// deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldSelector {
    ParagraphContent,
    ParagraphLead,
    HeadingContent,
    ImageUrl,
    ImageCaption,
    VideoUrl,
    VideoCaption,
    QuoteContent,
    QuoteAuthor,
    GalleryUrl,
    GalleryCaption,
}

impl FieldSelector {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSelector::ParagraphContent => "paragraph-content",
            FieldSelector::ParagraphLead => "paragraph-lead",
            FieldSelector::HeadingContent => "heading-content",
            FieldSelector::ImageUrl => "image-url",
            FieldSelector::ImageCaption => "image-caption",
            FieldSelector::VideoUrl => "video-url",
            FieldSelector::VideoCaption => "video-caption",
            FieldSelector::QuoteContent => "quote-content",
            FieldSelector::QuoteAuthor => "quote-author",
            FieldSelector::GalleryUrl => "gallery-url",
            FieldSelector::GalleryCaption => "gallery-caption",
        }
    }

    /// Selectors rendered for a block kind, in render order
    pub fn for_block(kind: BlockKind) -> &'static [FieldSelector] {
        match kind {
            BlockKind::Paragraph => &[
                FieldSelector::ParagraphContent,
                FieldSelector::ParagraphLead,
            ],
            BlockKind::Heading => &[FieldSelector::HeadingContent],
            BlockKind::Image => &[FieldSelector::ImageUrl, FieldSelector::ImageCaption],
            BlockKind::Video => &[FieldSelector::VideoUrl, FieldSelector::VideoCaption],
            BlockKind::Quote => &[FieldSelector::QuoteContent, FieldSelector::QuoteAuthor],
        }
    }

    pub fn for_gallery() -> &'static [FieldSelector] {
        &[FieldSelector::GalleryUrl, FieldSelector::GalleryCaption]
    }

    /// Fields that receive a URL from an asset upload widget
    pub fn is_upload_target(&self) -> bool {
        matches!(
            self,
            FieldSelector::ImageUrl | FieldSelector::VideoUrl | FieldSelector::GalleryUrl
        )
    }

    /// Whether the widget is a checkbox rather than a text input
    pub fn is_flag(&self) -> bool {
        matches!(self, FieldSelector::ParagraphLead)
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live value held by a field widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(_) => None,
        }
    }

    fn same_shape(&self, other: &FieldValue) -> bool {
        matches!(
            (self, other),
            (FieldValue::Text(_), FieldValue::Text(_)) | (FieldValue::Flag(_), FieldValue::Flag(_))
        )
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

/// What a control node edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Block(BlockKind),
    GalleryImage,
}

/// Editable view of one sequence entry
#[derive(Debug, Clone, PartialEq)]
pub struct ControlNode {
    block_id: BlockId,
    index: usize,
    kind: ControlKind,
    fields: Vec<(FieldSelector, FieldValue)>,
    move_up_enabled: bool,
    move_down_enabled: bool,
}

impl ControlNode {
    pub(crate) fn new(
        block_id: BlockId,
        index: usize,
        kind: ControlKind,
        fields: Vec<(FieldSelector, FieldValue)>,
    ) -> Self {
        Self {
            block_id,
            index,
            kind,
            fields,
            move_up_enabled: index > 0,
            move_down_enabled: true,
        }
    }

    pub fn block_id(&self) -> BlockId {
        self.block_id
    }

    /// Index attribute written when this node was rendered
    pub fn index_attribute(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn fields(&self) -> &[(FieldSelector, FieldValue)] {
        &self.fields
    }

    pub fn field(&self, selector: FieldSelector) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(sel, _)| *sel == selector)
            .map(|(_, value)| value)
    }

    pub fn text(&self, selector: FieldSelector) -> Option<&str> {
        self.field(selector).and_then(FieldValue::as_text)
    }

    pub fn flag(&self, selector: FieldSelector) -> Option<bool> {
        self.field(selector).and_then(FieldValue::as_flag)
    }

    /// Write a live value into a field, as typing into the widget would.
    ///
    /// Returns `false` if this node has no such field or the value has the
    /// wrong shape (text into a checkbox or the reverse).
    pub fn set_field(&mut self, selector: FieldSelector, value: FieldValue) -> bool {
        match self.fields.iter_mut().find(|(sel, _)| *sel == selector) {
            Some((_, slot)) if slot.same_shape(&value) => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    pub fn move_up_enabled(&self) -> bool {
        self.move_up_enabled
    }

    pub fn move_down_enabled(&self) -> bool {
        self.move_down_enabled
    }

    pub(crate) fn set_move_down_enabled(&mut self, enabled: bool) {
        self.move_down_enabled = enabled;
    }

    pub fn has_upload_field(&self) -> bool {
        self.fields.iter().any(|(sel, _)| sel.is_upload_target())
    }

    /// Read the node's current values as a block patch.
    ///
    /// Only fields present on the node end up in the patch; a missing field
    /// simply stays `None`.
    pub fn read_block_patch(&self) -> BlockPatch {
        let mut patch = BlockPatch::default();
        for (selector, value) in &self.fields {
            match (selector, value) {
                (
                    FieldSelector::ParagraphContent
                    | FieldSelector::HeadingContent
                    | FieldSelector::QuoteContent,
                    FieldValue::Text(text),
                ) => patch.content = Some(text.clone()),
                (FieldSelector::ParagraphLead, FieldValue::Flag(flag)) => patch.lead = Some(*flag),
                (FieldSelector::ImageUrl | FieldSelector::VideoUrl, FieldValue::Text(text)) => {
                    patch.url = Some(text.clone())
                }
                (
                    FieldSelector::ImageCaption | FieldSelector::VideoCaption,
                    FieldValue::Text(text),
                ) => patch.caption = Some(text.clone()),
                (FieldSelector::QuoteAuthor, FieldValue::Text(text)) => {
                    patch.author = Some(text.clone())
                }
                _ => {}
            }
        }
        patch
    }

    pub fn read_gallery_patch(&self) -> GalleryPatch {
        GalleryPatch {
            url: self.text(FieldSelector::GalleryUrl).map(str::to_string),
            caption: self.text(FieldSelector::GalleryCaption).map(str::to_string),
        }
    }
}
