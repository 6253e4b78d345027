//! hast to HTML writer
//!
//! Serializes an hast tree into an HTML string. Each node kind has its own
//! [`NodeWriter`]; [`HastWriter`] dispatches to them and recurses.
//!
//! Block-level elements start on a new line, indented by the number of
//! block elements already written in the pass. The indent is never reduced
//! when a block closes.

use crate::attr::{has_attributes, write_properties};
use crate::nodes::{ElementContent, HtmlNode, HtmlNodeKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options for the HTML writer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct WriterOptions {
    /// Spaces per indent level (default: 2)
    pub indent_length: usize,
    /// Escape text nodes and attribute values (default: false)
    pub escape: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent_length: 2,
            escape: false,
        }
    }
}

/// Mutable formatting state shared by every writer in one pass
#[derive(Debug, Clone)]
pub struct WriterContext {
    indent_level: usize,
    indent_length: usize,
    escape: bool,
}

impl WriterContext {
    pub fn new(options: &WriterOptions) -> Self {
        Self {
            indent_level: 0,
            indent_length: options.indent_length,
            escape: options.escape,
        }
    }

    /// Number of block elements written so far in this pass
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn indent_length(&self) -> usize {
        self.indent_length
    }

    pub fn escape(&self) -> bool {
        self.escape
    }

    pub fn increment_indent(&mut self) {
        self.indent_level += 1;
    }

    fn write_indent(&self, out: &mut String) {
        let width = self.indent_level * self.indent_length;
        out.extend(std::iter::repeat_n(' ', width));
    }
}

/// A writer was handed a node of the wrong kind
///
/// This means the dispatch table is broken, not that the input is bad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{expected} writer received a {found} node")]
pub struct WriterFault {
    pub expected: HtmlNodeKind,
    pub found: HtmlNodeKind,
}

fn fault(expected: HtmlNodeKind, node: &HtmlNode) -> ! {
    panic!(
        "{}",
        WriterFault {
            expected,
            found: node.kind(),
        }
    )
}

/// Writer for a single hast node kind.
pub trait NodeWriter {
    fn write_node(
        &self,
        writer: &HastWriter,
        node: &HtmlNode,
        ctx: &mut WriterContext,
        out: &mut String,
    );
}

/// Writes an hast doctype node, always as:
///
/// ```text
/// <!doctype html>
/// ```
///
/// https://github.com/syntax-tree/hast#doctype
#[derive(Debug, Default)]
pub struct DoctypeWriter;

impl NodeWriter for DoctypeWriter {
    fn write_node(&self, _: &HastWriter, node: &HtmlNode, _: &mut WriterContext, out: &mut String) {
        let HtmlNode::Doctype = node else {
            fault(HtmlNodeKind::Doctype, node)
        };
        out.push_str("<!doctype html>\n");
    }
}

/// Writes an hast comment node.
///
/// https://github.com/syntax-tree/hast#comment
#[derive(Debug, Default)]
pub struct CommentWriter;

impl NodeWriter for CommentWriter {
    fn write_node(&self, _: &HastWriter, node: &HtmlNode, _: &mut WriterContext, out: &mut String) {
        let HtmlNode::Comment(value) = node else {
            fault(HtmlNodeKind::Comment, node)
        };
        out.push_str("<!-- ");
        out.push_str(value);
        out.push_str(" -->");
    }
}

/// Writes an hast element node.
///
/// https://github.com/syntax-tree/hast#element
#[derive(Debug, Default)]
pub struct ElementWriter;

impl NodeWriter for ElementWriter {
    fn write_node(
        &self,
        writer: &HastWriter,
        node: &HtmlNode,
        ctx: &mut WriterContext,
        out: &mut String,
    ) {
        let HtmlNode::Element(el) = node else {
            fault(HtmlNodeKind::Element, node)
        };
        let tag_name = el.tag_name();

        if is_block_tag(tag_name) {
            out.push('\n');
            ctx.write_indent(out);
            ctx.increment_indent();
        }

        out.push('<');
        out.push_str(tag_name);
        if has_attributes(el.properties()) {
            out.push(' ');
            write_properties(el.properties(), ctx.escape(), out);
        }
        out.push('>');

        match el.content() {
            ElementContent::Children(children) => {
                if children.is_empty() && is_void_tag(tag_name) {
                    return;
                }
                for child in children {
                    writer.write(child, ctx, out);
                }
            }
            // Literal bodies (script, style) are never escaped.
            ElementContent::Literal(value) => out.push_str(value),
        }

        out.push_str("</");
        out.push_str(tag_name);
        out.push('>');
    }
}

/// Writes an hast raw node verbatim, followed by a newline.
#[derive(Debug, Default)]
pub struct RawWriter;

impl NodeWriter for RawWriter {
    fn write_node(&self, _: &HastWriter, node: &HtmlNode, _: &mut WriterContext, out: &mut String) {
        let HtmlNode::Raw(value) = node else {
            fault(HtmlNodeKind::Raw, node)
        };
        out.push_str(value);
        out.push('\n');
    }
}

/// Writes the children of an hast root node, with no wrapping.
///
/// https://github.com/syntax-tree/hast#root
#[derive(Debug, Default)]
pub struct RootWriter;

impl NodeWriter for RootWriter {
    fn write_node(
        &self,
        writer: &HastWriter,
        node: &HtmlNode,
        ctx: &mut WriterContext,
        out: &mut String,
    ) {
        let HtmlNode::Root(children) = node else {
            fault(HtmlNodeKind::Root, node)
        };
        for child in children {
            writer.write(child, ctx, out);
        }
    }
}

/// Writes an hast text node.
///
/// https://github.com/syntax-tree/hast#text
#[derive(Debug, Default)]
pub struct TextWriter;

impl NodeWriter for TextWriter {
    fn write_node(&self, _: &HastWriter, node: &HtmlNode, ctx: &mut WriterContext, out: &mut String) {
        let HtmlNode::Text(value) = node else {
            fault(HtmlNodeKind::Text, node)
        };
        if ctx.escape() {
            out.push_str(&html_escape::encode_text(value));
        } else {
            out.push_str(value);
        }
    }
}

/// Dispatches each hast node to the writer for its kind
#[derive(Debug, Default)]
pub struct HastWriter {
    doctype: DoctypeWriter,
    comment: CommentWriter,
    element: ElementWriter,
    raw: RawWriter,
    root: RootWriter,
    text: TextWriter,
}

impl HastWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The writer registered for `kind`
    pub fn writer_for(&self, kind: HtmlNodeKind) -> &dyn NodeWriter {
        match kind {
            HtmlNodeKind::Doctype => &self.doctype,
            HtmlNodeKind::Comment => &self.comment,
            HtmlNodeKind::Element => &self.element,
            HtmlNodeKind::Raw => &self.raw,
            HtmlNodeKind::Root => &self.root,
            HtmlNodeKind::Text => &self.text,
        }
    }

    /// Append `node` to `out`
    pub fn write(&self, node: &HtmlNode, ctx: &mut WriterContext, out: &mut String) {
        self.writer_for(node.kind()).write_node(self, node, ctx, out);
    }
}

/// Convert hast to an HTML string
pub fn write_to_string(node: &HtmlNode, options: &WriterOptions) -> String {
    tracing::trace!(indent_length = options.indent_length, "writing html");
    let mut ctx = WriterContext::new(options);
    let mut out = String::new();
    HastWriter::new().write(node, &mut ctx, &mut out);
    out
}

/// Tags that start on a new, indented line
const BLOCK_TAGS: &[&str] = &[
    "blockquote",
    "body",
    "div",
    "heading",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ol",
    "p",
    "pre",
    "li",
    "ul",
];

/// Tags written without a closing tag when they have no children
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_block_tag(tag_name: &str) -> bool {
    BLOCK_TAGS.contains(&tag_name)
}

pub fn is_void_tag(tag_name: &str) -> bool {
    VOID_TAGS.contains(&tag_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{Properties, props};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn write(node: &HtmlNode) -> String {
        write_to_string(node, &WriterOptions::default())
    }

    #[test]
    fn test_doctype() {
        assert_eq!(write(&HtmlNode::doctype()), "<!doctype html>\n");
    }

    #[test]
    fn test_comment() {
        assert_eq!(write(&HtmlNode::comment("note")), "<!-- note -->");
    }

    #[test]
    fn test_text_is_not_escaped_by_default() {
        assert_eq!(write(&HtmlNode::text("a < b & c")), "a < b & c");
    }

    #[test]
    fn test_text_escape_option() {
        let opts = WriterOptions {
            escape: true,
            ..Default::default()
        };
        let node = HtmlNode::elem("span", vec![HtmlNode::text("a < b & c")]);
        assert_eq!(write_to_string(&node, &opts), "<span>a &lt; b &amp; c</span>");
    }

    #[test]
    fn test_raw_gets_trailing_newline() {
        assert_eq!(write(&HtmlNode::raw("<div>x</div>")), "<div>x</div>\n");
    }

    #[test]
    fn test_root_writes_children_in_order() {
        let root = HtmlNode::root(vec![
            HtmlNode::text("a"),
            HtmlNode::comment("b"),
            HtmlNode::text("c"),
        ]);
        assert_eq!(write(&root), "a<!-- b -->c");
    }

    #[rstest]
    #[case("x")]
    #[case("if (a < b && c) { go(); }")]
    #[case("</p> & <b>")]
    fn test_literal_element_is_verbatim(#[case] body: &str) {
        let node = HtmlNode::elem_text("script", body);
        assert_eq!(write(&node), format!("<script>{body}</script>"));
    }

    #[test]
    fn test_literal_element_is_not_escaped_with_escape_option() {
        let opts = WriterOptions {
            escape: true,
            ..Default::default()
        };
        let node = HtmlNode::elem_text("style", "a > b { color: red }");
        assert_eq!(
            write_to_string(&node, &opts),
            "<style>a > b { color: red }</style>"
        );
    }

    #[test]
    fn test_inline_element_with_attributes() {
        let node = HtmlNode::elem_props(
            "a",
            props([("href", "/".into()), ("title", "Home page".into())]),
            vec![HtmlNode::text("Home")],
        );
        assert_eq!(write(&node), r#"<a href="/" title="Home page">Home</a>"#);
    }

    #[test]
    fn test_all_false_properties_write_no_space() {
        let node = HtmlNode::elem_props("span", props([("hidden", false.into())]), vec![]);
        assert_eq!(write(&node), "<span></span>");
    }

    #[test]
    fn test_blockquote_paragraph() {
        let node = HtmlNode::root(vec![HtmlNode::elem(
            "blockquote",
            vec![HtmlNode::elem("p", vec![HtmlNode::text("hi")])],
        )]);
        assert_eq!(write(&node), "\n<blockquote>\n  <p>hi</p></blockquote>");
    }

    fn nested_divs(depth: usize) -> HtmlNode {
        let mut node = HtmlNode::text("leaf");
        for _ in 0..depth {
            node = HtmlNode::elem("div", vec![node]);
        }
        node
    }

    #[rstest]
    #[case(1, 2)]
    #[case(3, 2)]
    #[case(4, 4)]
    #[case(3, 0)]
    fn test_nested_block_indentation(#[case] depth: usize, #[case] width: usize) {
        let opts = WriterOptions {
            indent_length: width,
            ..Default::default()
        };
        let html = write_to_string(&nested_divs(depth), &opts);

        let mut expected = String::new();
        for k in 0..depth {
            expected.push('\n');
            expected.push_str(&" ".repeat(k * width));
            expected.push_str("<div>");
        }
        expected.push_str("leaf");
        expected.push_str(&"</div>".repeat(depth));
        assert_eq!(html, expected);
    }

    #[test]
    fn test_indentation_never_decreases_for_siblings() {
        let node = HtmlNode::root(vec![
            HtmlNode::elem("ul", vec![HtmlNode::elem_text("li", "a")]),
            HtmlNode::elem_text("p", "after"),
            HtmlNode::elem_text("p", "again"),
        ]);
        assert_eq!(
            write(&node),
            "\n<ul>\n  <li>a</li></ul>\n    <p>after</p>\n      <p>again</p>"
        );
    }

    #[test]
    fn test_inline_tags_do_not_indent() {
        let node = HtmlNode::elem(
            "p",
            vec![
                HtmlNode::elem_text("em", "a"),
                HtmlNode::elem_text("code", "b"),
            ],
        );
        assert_eq!(write(&node), "\n<p><em>a</em><code>b</code></p>");
    }

    #[test]
    fn test_void_elements() {
        let img = HtmlNode::elem_props(
            "img",
            props([("src", "a.png".into()), ("alt", "A".into())]),
            vec![],
        );
        assert_eq!(write(&img), r#"<img src="a.png" alt="A">"#);
        assert_eq!(write(&HtmlNode::elem("br", vec![])), "<br>");
    }

    #[test]
    fn test_non_void_empty_element_is_closed() {
        let node = HtmlNode::elem_props_text(
            "script",
            props([("defer", true.into()), ("src", "/a.js".into())]),
            "",
        );
        assert_eq!(write(&node), r#"<script defer src="/a.js"></script>"#);
        assert_eq!(write(&HtmlNode::elem("span", vec![])), "<span></span>");
    }

    #[test]
    fn test_context_counts_block_elements() {
        let mut ctx = WriterContext::new(&WriterOptions::default());
        let mut out = String::new();
        let node = HtmlNode::root(vec![
            HtmlNode::elem_text("h1", "t"),
            HtmlNode::elem_text("span", "s"),
            HtmlNode::elem_text("p", "x"),
        ]);
        HastWriter::new().write(&node, &mut ctx, &mut out);
        assert_eq!(ctx.indent_level(), 2);
        assert_eq!(ctx.indent_length(), 2);
    }

    #[test]
    #[should_panic(expected = "element writer received a text node")]
    fn test_writer_fault_on_kind_mismatch() {
        let writer = HastWriter::new();
        let mut ctx = WriterContext::new(&WriterOptions::default());
        let mut out = String::new();
        writer
            .writer_for(HtmlNodeKind::Element)
            .write_node(&writer, &HtmlNode::text("x"), &mut ctx, &mut out);
    }

    #[test]
    fn test_writer_fault_message() {
        let fault = WriterFault {
            expected: HtmlNodeKind::Doctype,
            found: HtmlNodeKind::Root,
        };
        assert_eq!(fault.to_string(), "doctype writer received a root node");
    }

    #[test]
    fn test_empty_properties_write_bare_tag() {
        let node = HtmlNode::elem_props("span", Properties::new(), vec![HtmlNode::text("x")]);
        assert_eq!(write(&node), "<span>x</span>");
    }
}
