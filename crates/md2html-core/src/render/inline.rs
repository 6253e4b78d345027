//! Renderers for inline content nodes

use super::{RenderDispatcher, RenderResult, Renderer, kind_mismatch};
use crate::definitions::Definitions;
use md2html_hast::{HtmlNode, Properties, PropertyValue};
use md2html_mdast::{Node, NodeKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, node: &Node, _: &Definitions, _: &RenderDispatcher) -> RenderResult<HtmlNode> {
        let Node::Text(text) = node else {
            kind_mismatch(NodeKind::Text, node)
        };
        Ok(HtmlNode::text(&text.value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InlineCodeRenderer;

impl Renderer for InlineCodeRenderer {
    fn render(&self, node: &Node, _: &Definitions, _: &RenderDispatcher) -> RenderResult<HtmlNode> {
        let Node::InlineCode(code) = node else {
            kind_mismatch(NodeKind::InlineCode, node)
        };
        Ok(HtmlNode::elem_text("code", &code.value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BreakRenderer;

impl Renderer for BreakRenderer {
    fn render(&self, node: &Node, _: &Definitions, _: &RenderDispatcher) -> RenderResult<HtmlNode> {
        let Node::Break = node else {
            kind_mismatch(NodeKind::Break, node)
        };
        Ok(HtmlNode::elem("br", vec![]))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkRenderer;

impl Renderer for LinkRenderer {
    fn render(
        &self,
        node: &Node,
        refs: &Definitions,
        dispatcher: &RenderDispatcher,
    ) -> RenderResult<HtmlNode> {
        let Node::Link(link) = node else {
            kind_mismatch(NodeKind::Link, node)
        };
        let children = dispatcher.render_children(&link.children, refs)?;
        Ok(anchor(&link.url, link.title.as_deref(), children))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRenderer;

impl Renderer for ImageRenderer {
    fn render(&self, node: &Node, _: &Definitions, _: &RenderDispatcher) -> RenderResult<HtmlNode> {
        let Node::Image(img) = node else {
            kind_mismatch(NodeKind::Image, node)
        };
        Ok(image(
            &img.url,
            img.alt.as_deref().unwrap_or_default(),
            img.title.as_deref(),
        ))
    }
}

/// `<a href title>` around already rendered children
pub(crate) fn anchor(url: &str, title: Option<&str>, children: Vec<HtmlNode>) -> HtmlNode {
    let mut properties = Properties::new();
    properties.insert("href".to_string(), PropertyValue::from(url));
    if let Some(title) = title {
        properties.insert("title".to_string(), PropertyValue::from(title));
    }
    HtmlNode::elem_props("a", properties, children)
}

/// `<img src alt title>`
pub(crate) fn image(url: &str, alt: &str, title: Option<&str>) -> HtmlNode {
    let mut properties = Properties::new();
    properties.insert("src".to_string(), PropertyValue::from(url));
    properties.insert("alt".to_string(), PropertyValue::from(alt));
    if let Some(title) = title {
        properties.insert("title".to_string(), PropertyValue::from(title));
    }
    HtmlNode::elem_props("img", properties, vec![])
}
