//! Renderers for block-level content nodes

use super::{RenderDispatcher, RenderResult, Renderer, kind_mismatch};
use crate::definitions::Definitions;
use md2html_hast::{HtmlNode, Properties, PropertyValue};
use md2html_mdast::{Node, NodeKind};

/// Renders a node's children and wraps them in a single element.
///
/// Shared by paragraphs, blockquotes and the inline containers
/// (emphasis, strong, delete).
#[derive(Debug, Clone)]
pub struct ContainerRenderer {
    kind: NodeKind,
    tag_name: &'static str,
}

impl ContainerRenderer {
    pub fn new(kind: NodeKind, tag_name: &'static str) -> Self {
        Self { kind, tag_name }
    }
}

impl Renderer for ContainerRenderer {
    fn render(
        &self,
        node: &Node,
        refs: &Definitions,
        dispatcher: &RenderDispatcher,
    ) -> RenderResult<HtmlNode> {
        if node.kind() != self.kind {
            kind_mismatch(self.kind, node);
        }
        let children = node.children().unwrap_or_default();
        Ok(HtmlNode::elem(
            self.tag_name,
            dispatcher.render_children(children, refs)?,
        ))
    }
}

/// `h1` through `h6`; out-of-range depths are clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingRenderer;

impl Renderer for HeadingRenderer {
    fn render(
        &self,
        node: &Node,
        refs: &Definitions,
        dispatcher: &RenderDispatcher,
    ) -> RenderResult<HtmlNode> {
        let Node::Heading(heading) = node else {
            kind_mismatch(NodeKind::Heading, node)
        };
        let depth = heading.depth.clamp(1, 6);
        Ok(HtmlNode::elem(
            format!("h{depth}"),
            dispatcher.render_children(&heading.children, refs)?,
        ))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListRenderer;

impl Renderer for ListRenderer {
    fn render(
        &self,
        node: &Node,
        refs: &Definitions,
        dispatcher: &RenderDispatcher,
    ) -> RenderResult<HtmlNode> {
        let Node::List(list) = node else {
            kind_mismatch(NodeKind::List, node)
        };
        let children = dispatcher.render_children(&list.children, refs)?;
        if !list.ordered {
            return Ok(HtmlNode::elem("ul", children));
        }

        let mut properties = Properties::new();
        if let Some(start) = list.start.filter(|&n| n != 1) {
            properties.insert("start".to_string(), PropertyValue::from(start.to_string()));
        }
        Ok(HtmlNode::elem_props("ol", properties, children))
    }
}

/// `li`, with a disabled checkbox first for task items
#[derive(Debug, Clone, Copy, Default)]
pub struct ListItemRenderer;

impl Renderer for ListItemRenderer {
    fn render(
        &self,
        node: &Node,
        refs: &Definitions,
        dispatcher: &RenderDispatcher,
    ) -> RenderResult<HtmlNode> {
        let Node::ListItem(item) = node else {
            kind_mismatch(NodeKind::ListItem, node)
        };
        let mut children = Vec::with_capacity(item.children.len() + 1);
        if let Some(checked) = item.checked {
            let properties = md2html_hast::props([
                ("type", "checkbox".into()),
                ("checked", checked.into()),
                ("disabled", true.into()),
            ]);
            children.push(HtmlNode::elem_props("input", properties, vec![]));
        }
        children.extend(dispatcher.render_children(&item.children, refs)?);
        Ok(HtmlNode::elem("li", children))
    }
}

/// `pre > code`, tagged with `language-*` when the fence names one
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeRenderer;

impl Renderer for CodeRenderer {
    fn render(&self, node: &Node, _: &Definitions, _: &RenderDispatcher) -> RenderResult<HtmlNode> {
        let Node::Code(code) = node else {
            kind_mismatch(NodeKind::Code, node)
        };
        let mut properties = Properties::new();
        if let Some(lang) = code.lang.as_deref().filter(|l| !l.is_empty()) {
            properties.insert(
                "class".to_string(),
                PropertyValue::List(vec![format!("language-{lang}")]),
            );
        }
        let code_elem = HtmlNode::elem_props("code", properties, vec![HtmlNode::text(&code.value)]);
        Ok(HtmlNode::elem("pre", vec![code_elem]))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThematicBreakRenderer;

impl Renderer for ThematicBreakRenderer {
    fn render(&self, node: &Node, _: &Definitions, _: &RenderDispatcher) -> RenderResult<HtmlNode> {
        let Node::ThematicBreak = node else {
            kind_mismatch(NodeKind::ThematicBreak, node)
        };
        Ok(HtmlNode::elem("hr", vec![]))
    }
}

/// Raw HTML from the source passes through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, node: &Node, _: &Definitions, _: &RenderDispatcher) -> RenderResult<HtmlNode> {
        let Node::Html(html) = node else {
            kind_mismatch(NodeKind::Html, node)
        };
        Ok(HtmlNode::raw(&html.value))
    }
}
