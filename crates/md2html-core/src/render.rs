//! mdast to hast rendering
//!
//! [`RenderDispatcher`] maps each content node kind to a [`Renderer`] and
//! rewrites the content tree into an HTML tree. Renderers recurse through the
//! dispatcher, so replacing the renderer for one kind changes it everywhere
//! in the document.

mod block;
mod inline;
mod reference;


pub use block::{
    CodeRenderer, ContainerRenderer, HeadingRenderer, HtmlRenderer, ListItemRenderer,
    ListRenderer, ThematicBreakRenderer,
};
pub use inline::{BreakRenderer, ImageRenderer, InlineCodeRenderer, LinkRenderer, TextRenderer};
pub use reference::{
    ImageReferenceRenderer, LinkReferenceRenderer, dangling_image_ref, dangling_link_ref,
};

use crate::definitions::Definitions;
use md2html_hast::HtmlNode;
use md2html_mdast::{Node, NodeKind, Root};
use std::collections::HashMap;
use thiserror::Error;

/// Render errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Unsupported content node: {0}")]
    Unsupported(NodeKind),
}

/// Render result type
pub type RenderResult<T> = Result<T, RenderError>;

/// Renders a single mdast node kind into hast.
pub trait Renderer {
    fn render(
        &self,
        node: &Node,
        refs: &Definitions,
        dispatcher: &RenderDispatcher,
    ) -> RenderResult<HtmlNode>;
}

impl<F> Renderer for F
where
    F: Fn(&Node, &Definitions, &RenderDispatcher) -> RenderResult<HtmlNode>,
{
    fn render(
        &self,
        node: &Node,
        refs: &Definitions,
        dispatcher: &RenderDispatcher,
    ) -> RenderResult<HtmlNode> {
        self(node, refs, dispatcher)
    }
}

/// Panics for a node handed to the renderer of another kind.
///
/// Only a mis-registered dispatcher can get here.
pub(crate) fn kind_mismatch(expected: NodeKind, node: &Node) -> ! {
    panic!(
        "{expected} renderer was dispatched a {} node",
        node.kind()
    )
}

/// Dispatches content nodes to the renderer registered for their kind
pub struct RenderDispatcher {
    renderers: HashMap<NodeKind, Box<dyn Renderer>>,
}

impl RenderDispatcher {
    /// Dispatcher with the default renderer for every HTML-renderable kind
    ///
    /// Definitions, tables and front matter have no default renderer.
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();

        // Block nodes
        dispatcher.register(NodeKind::Heading, HeadingRenderer);
        dispatcher.register(
            NodeKind::Paragraph,
            ContainerRenderer::new(NodeKind::Paragraph, "p"),
        );
        dispatcher.register(
            NodeKind::Blockquote,
            ContainerRenderer::new(NodeKind::Blockquote, "blockquote"),
        );
        dispatcher.register(NodeKind::List, ListRenderer);
        dispatcher.register(NodeKind::ListItem, ListItemRenderer);
        dispatcher.register(NodeKind::Code, CodeRenderer);
        dispatcher.register(NodeKind::ThematicBreak, ThematicBreakRenderer);
        dispatcher.register(NodeKind::Html, HtmlRenderer);

        // Inline nodes
        dispatcher.register(NodeKind::Text, TextRenderer);
        dispatcher.register(
            NodeKind::Emphasis,
            ContainerRenderer::new(NodeKind::Emphasis, "em"),
        );
        dispatcher.register(
            NodeKind::Strong,
            ContainerRenderer::new(NodeKind::Strong, "strong"),
        );
        dispatcher.register(
            NodeKind::Delete,
            ContainerRenderer::new(NodeKind::Delete, "del"),
        );
        dispatcher.register(NodeKind::InlineCode, InlineCodeRenderer);
        dispatcher.register(NodeKind::Break, BreakRenderer);
        dispatcher.register(NodeKind::Link, LinkRenderer);
        dispatcher.register(NodeKind::Image, ImageRenderer);
        dispatcher.register(NodeKind::LinkReference, LinkReferenceRenderer);
        dispatcher.register(NodeKind::ImageReference, ImageReferenceRenderer);

        dispatcher
    }

    /// Dispatcher with no renderers registered
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Register `renderer` for `kind`, replacing any previous one
    pub fn register(&mut self, kind: NodeKind, renderer: impl Renderer + 'static) {
        self.renderers.insert(kind, Box::new(renderer));
    }

    /// Builder form of [`RenderDispatcher::register`]
    pub fn with_renderer(mut self, kind: NodeKind, renderer: impl Renderer + 'static) -> Self {
        self.register(kind, renderer);
        self
    }

    pub fn supports(&self, kind: NodeKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Render one node through the renderer for its kind
    pub fn render(&self, node: &Node, refs: &Definitions) -> RenderResult<HtmlNode> {
        let kind = node.kind();
        match self.renderers.get(&kind) {
            Some(renderer) => renderer.render(node, refs, self),
            None => {
                tracing::debug!(%kind, "no renderer registered");
                Err(RenderError::Unsupported(kind))
            }
        }
    }

    /// Render nodes in order, stopping at the first error
    ///
    /// Definition nodes only feed the reference table and render to nothing.
    pub fn render_children(
        &self,
        children: &[Node],
        refs: &Definitions,
    ) -> RenderResult<Vec<HtmlNode>> {
        children
            .iter()
            .filter(|child| !matches!(child, Node::Definition(_)))
            .map(|child| self.render(child, refs))
            .collect()
    }

    /// Render a document root into an hast root
    pub fn render_root(&self, root: &Root, refs: &Definitions) -> RenderResult<HtmlNode> {
        Ok(HtmlNode::root(self.render_children(&root.children, refs)?))
    }
}

impl Default for RenderDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
