//! md2html-hast: HTML syntax tree and writer for md2html
//!
//! This crate provides:
//! - hast (HTML Abstract Syntax Tree) node types
//! - A per-node-kind writer that serializes hast into indented HTML text
//! - The attribute writer used for element properties
//!
//! ## Example
//!
//! ```rust
//! use md2html_hast::{HtmlNode, WriterOptions, write_to_string};
//!
//! let doc = HtmlNode::root(vec![
//!     HtmlNode::doctype(),
//!     HtmlNode::elem_text("p", "hello"),
//! ]);
//!
//! let html = write_to_string(&doc, &WriterOptions::default());
//! assert_eq!(html, "<!doctype html>\n\n<p>hello</p>");
//! ```

pub mod attr;
pub mod nodes;
pub mod writer;

pub use attr::{has_attributes, write_properties};
pub use nodes::{
    Element, ElementContent, HtmlNode, HtmlNodeKind, Properties, PropertyValue, is_literal_tag,
    props,
};
pub use writer::{
    HastWriter, NodeWriter, WriterContext, WriterFault, WriterOptions, is_block_tag, is_void_tag,
    write_to_string,
};
