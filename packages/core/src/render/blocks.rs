//! Block-type renderers
//!
//! Pure functions from a model entry to a [`ControlNode`]. The fields a node
//! gets are exactly the selectors of its kind, filled from the entry's
//! current values.

use crate::models::{BlockId, ContentBlock, GalleryImage};
use crate::render::{ControlKind, ControlNode, FieldSelector, FieldValue};
use crate::sequence::OrderedSequence;

/// Options that affect every node of a rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    /// Disable the move-down action on the last node
    pub disable_move_down_at_end: bool,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            disable_move_down_at_end: true,
        }
    }
}

/// Render one content block bound to `index`
pub fn render_block(id: BlockId, block: &ContentBlock, index: usize) -> ControlNode {
    let fields = FieldSelector::for_block(block.kind())
        .iter()
        .map(|selector| (*selector, block_field(block, *selector)))
        .collect();

    ControlNode::new(id, index, ControlKind::Block(block.kind()), fields)
}

/// Render one gallery image bound to `index`
pub fn render_gallery_image(id: BlockId, image: &GalleryImage, index: usize) -> ControlNode {
    let fields = vec![
        (FieldSelector::GalleryUrl, FieldValue::from(image.url.as_str())),
        (
            FieldSelector::GalleryCaption,
            FieldValue::from(image.caption.as_str()),
        ),
    ];

    ControlNode::new(id, index, ControlKind::GalleryImage, fields)
}

/// Render a whole body, one node per block, in order
pub fn render_content(
    model: &OrderedSequence<ContentBlock>,
    policy: RenderPolicy,
) -> Vec<ControlNode> {
    render_list(model, policy, render_block)
}

/// Render a whole gallery, one node per image, in order
pub fn render_gallery(
    model: &OrderedSequence<GalleryImage>,
    policy: RenderPolicy,
) -> Vec<ControlNode> {
    render_list(model, policy, render_gallery_image)
}

fn render_list<T>(
    model: &OrderedSequence<T>,
    policy: RenderPolicy,
    render: fn(BlockId, &T, usize) -> ControlNode,
) -> Vec<ControlNode> {
    let last = model.len().saturating_sub(1);
    model
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let mut node = render(entry.id, &entry.item, index);
            if policy.disable_move_down_at_end && index == last {
                node.set_move_down_enabled(false);
            }
            node
        })
        .collect()
}

fn block_field(block: &ContentBlock, selector: FieldSelector) -> FieldValue {
    match (block, selector) {
        (ContentBlock::Paragraph { lead, .. }, FieldSelector::ParagraphLead) => {
            FieldValue::Flag(*lead)
        }
        (ContentBlock::Image { url, .. }, FieldSelector::ImageUrl)
        | (ContentBlock::Video { url, .. }, FieldSelector::VideoUrl) => {
            FieldValue::from(url.as_str())
        }
        (ContentBlock::Image { caption, .. }, FieldSelector::ImageCaption)
        | (ContentBlock::Video { caption, .. }, FieldSelector::VideoCaption) => {
            FieldValue::from(caption.as_str())
        }
        (ContentBlock::Quote { author, .. }, FieldSelector::QuoteAuthor) => {
            FieldValue::from(author.as_str())
        }
        (_, selector) if selector.is_flag() => FieldValue::Flag(false),
        (block, _) => FieldValue::from(block.content().unwrap_or_default()),
    }
}
