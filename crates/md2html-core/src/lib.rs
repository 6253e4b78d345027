//! md2html-core: Core library for rendering mdast documents to HTML
//!
//! This crate provides:
//! - A render dispatcher that turns the mdast content tree into hast
//! - Link/image reference resolution against collected definitions
//! - A page template wrapping the rendered body in a full HTML document
//! - TOML configuration and a one-call pipeline from mdast to HTML text

pub mod config;
pub mod definitions;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod render;

pub use config::{CONFIG_FILE_NAME, Config};
pub use definitions::{Definitions, LinkTarget, normalize_identifier};
pub use document::{PageOptions, page};
pub use error::{Error, Result};
pub use pipeline::{render_document, render_document_with, render_fragment, render_json, to_hast};
pub use render::{RenderDispatcher, RenderError, RenderResult, Renderer};

pub use md2html_hast::{self as hast, HtmlNode, WriterOptions};
pub use md2html_mdast::{self as mdast, Node as MdNode, NodeKind, Root as MdRoot};
