//! Link and image references
//!
//! A reference resolves through the definition table. When no definition
//! matches, the reference is rendered back as the Markdown text it was
//! written as, so a missing definition shows up in the page instead of
//! failing the render.

use super::inline::{anchor, image};
use super::{RenderDispatcher, RenderResult, Renderer, kind_mismatch};
use crate::definitions::{Definitions, normalize_identifier};
use md2html_hast::HtmlNode;
use md2html_mdast::{ImageReference, LinkReference, Node, NodeKind, ReferenceType, plain_text};

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkReferenceRenderer;

impl Renderer for LinkReferenceRenderer {
    fn render(
        &self,
        node: &Node,
        refs: &Definitions,
        dispatcher: &RenderDispatcher,
    ) -> RenderResult<HtmlNode> {
        let Node::LinkReference(link_ref) = node else {
            kind_mismatch(NodeKind::LinkReference, node)
        };
        let Some(target) = refs.get(&link_ref.identifier) else {
            tracing::debug!(identifier = %link_ref.identifier, "dangling link reference");
            return Ok(dangling_link_ref(link_ref));
        };
        let children = dispatcher.render_children(&link_ref.children, refs)?;
        Ok(anchor(&target.url, target.title.as_deref(), children))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageReferenceRenderer;

impl Renderer for ImageReferenceRenderer {
    fn render(&self, node: &Node, refs: &Definitions, _: &RenderDispatcher) -> RenderResult<HtmlNode> {
        let Node::ImageReference(image_ref) = node else {
            kind_mismatch(NodeKind::ImageReference, node)
        };
        let Some(target) = refs.get(&image_ref.identifier) else {
            tracing::debug!(identifier = %image_ref.identifier, "dangling image reference");
            return Ok(dangling_image_ref(image_ref));
        };
        Ok(image(
            &target.url,
            image_ref.alt.as_deref().unwrap_or_default(),
            target.title.as_deref(),
        ))
    }
}

/// Returns the Markdown text of a link reference rather than its definition.
///
/// Used when no definition matches the node's identifier.
pub fn dangling_link_ref(link_ref: &LinkReference) -> HtmlNode {
    let id = source_id(&link_ref.identifier, link_ref.label.as_deref());
    let text = match link_ref.reference_type {
        ReferenceType::Shortcut => format!("[{id}]"),
        ReferenceType::Collapsed => format!("[{id}][]"),
        ReferenceType::Full => {
            let content = plain_text(&link_ref.children);
            let text = non_empty(&content)
                .or(link_ref.label.as_deref())
                .unwrap_or(&link_ref.identifier);
            format!("[{text}][{id}]")
        }
    };
    HtmlNode::text(text)
}

/// Returns the Markdown text of an image reference rather than its definition.
///
/// Used when no definition matches the node's identifier.
///
/// <https://spec.commonmark.org/0.30/#images>
pub fn dangling_image_ref(image_ref: &ImageReference) -> HtmlNode {
    let id = source_id(&image_ref.identifier, image_ref.label.as_deref());
    let text = match image_ref.reference_type {
        ReferenceType::Shortcut => format!("![{id}]"),
        ReferenceType::Collapsed => format!("![{id}][]"),
        ReferenceType::Full => {
            let alt = image_ref.alt.as_deref().and_then(non_empty);
            let text = alt
                .or(image_ref.label.as_deref())
                .unwrap_or(&image_ref.identifier);
            format!("![{text}][{id}]")
        }
    };
    HtmlNode::text(text)
}

/// The identifier as spelled in the source.
///
/// mdast keeps the raw spelling in `label`. A label that does not normalize
/// to the identifier is human text, so the identifier is used instead.
fn source_id<'a>(identifier: &'a str, label: Option<&'a str>) -> &'a str {
    match label {
        Some(label) if normalize_identifier(label) == normalize_identifier(identifier) => label,
        _ => identifier,
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
