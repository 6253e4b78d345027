//! One-call rendering from mdast to HTML text
//!
//! Each entry point collects definitions, renders the whole tree, and only
//! then writes. A render error leaves nothing half-written.

use crate::config::Config;
use crate::definitions::Definitions;
use crate::document::page;
use crate::error::Result;
use crate::render::{RenderDispatcher, RenderResult};
use md2html_hast::{HtmlNode, write_to_string};
use md2html_mdast::Root;

/// Render a document into an hast root with the default renderers
pub fn to_hast(root: &Root) -> RenderResult<HtmlNode> {
    let refs = Definitions::collect(root);
    RenderDispatcher::new().render_root(root, &refs)
}

/// Render a document into a complete HTML page
pub fn render_document(root: &Root, config: &Config) -> Result<String> {
    render_document_with(&RenderDispatcher::new(), root, config)
}

/// Render a complete HTML page using a custom dispatcher
pub fn render_document_with(
    dispatcher: &RenderDispatcher,
    root: &Root,
    config: &Config,
) -> Result<String> {
    let refs = Definitions::collect(root);
    tracing::trace!(
        nodes = root.children.len(),
        definitions = refs.len(),
        "rendering document"
    );
    let body = dispatcher.render_children(&root.children, &refs)?;
    let tree = page(body, &config.page);
    Ok(write_to_string(&tree, &config.writer))
}

/// Render a document body without the page template
pub fn render_fragment(root: &Root, config: &Config) -> Result<String> {
    let tree = to_hast(root)?;
    Ok(write_to_string(&tree, &config.writer))
}

/// Parse mdast JSON and render it into a complete HTML page
pub fn render_json(json: &str, config: &Config) -> Result<String> {
    let root: Root = serde_json::from_str(json)?;
    render_document(&root, config)
}
