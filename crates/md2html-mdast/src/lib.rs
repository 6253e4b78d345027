//! md2html-mdast: content tree types for md2html
//!
//! This crate provides the mdast (Markdown Abstract Syntax Tree) subset that
//! the renderer consumes. The tree is produced upstream by a Markdown parser
//! and arrives either in memory or as mdast JSON.
//!
//! ## Example
//!
//! ```rust
//! use md2html_mdast::{Node, NodeKind, Root};
//!
//! let doc = Root::new(vec![
//!     Node::heading(1, vec![Node::text("Hello")]),
//!     Node::paragraph(vec![Node::text("World")]),
//! ]);
//!
//! assert_eq!(doc.children[0].kind(), NodeKind::Heading);
//! ```

pub mod mdast;

pub use mdast::{
    Align, Blockquote, Code, Definition, Delete, Emphasis, Heading, Html, Image, ImageReference,
    InlineCode, Link, LinkReference, List, ListItem, Node, NodeKind, Paragraph, ReferenceType,
    Root, Strong, Table, TableCell, TableRow, Text, Toml, Yaml, plain_text,
};
