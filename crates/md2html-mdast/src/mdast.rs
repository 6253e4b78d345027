//! mdast (Markdown Abstract Syntax Tree) types
//!
//! A subset of mdast nodes needed for HTML generation.
//! Reference: https://github.com/syntax-tree/mdast

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root node of an mdast document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// An mdast node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    // Block nodes
    Heading(Heading),
    Paragraph(Paragraph),
    ThematicBreak,
    Blockquote(Blockquote),
    List(List),
    ListItem(ListItem),
    Code(Code),
    Html(Html),
    Definition(Definition),
    Table(Table),
    TableRow(TableRow),
    TableCell(TableCell),

    // Inline nodes
    Text(Text),
    Emphasis(Emphasis),
    Strong(Strong),
    Delete(Delete),
    InlineCode(InlineCode),
    Break,
    Link(Link),
    Image(Image),
    LinkReference(LinkReference),
    ImageReference(ImageReference),

    // Front matter (should be stripped by the metadata stage)
    Toml(Toml),
    Yaml(Yaml),
}

/// Field-less mirror of [`Node`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Heading,
    Paragraph,
    ThematicBreak,
    Blockquote,
    List,
    ListItem,
    Code,
    Html,
    Definition,
    Table,
    TableRow,
    TableCell,
    Text,
    Emphasis,
    Strong,
    Delete,
    InlineCode,
    Break,
    Link,
    Image,
    LinkReference,
    ImageReference,
    Toml,
    Yaml,
}

impl NodeKind {
    /// The mdast `type` name of this kind
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Heading => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::ThematicBreak => "thematicBreak",
            NodeKind::Blockquote => "blockquote",
            NodeKind::List => "list",
            NodeKind::ListItem => "listItem",
            NodeKind::Code => "code",
            NodeKind::Html => "html",
            NodeKind::Definition => "definition",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tableRow",
            NodeKind::TableCell => "tableCell",
            NodeKind::Text => "text",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Strong => "strong",
            NodeKind::Delete => "delete",
            NodeKind::InlineCode => "inlineCode",
            NodeKind::Break => "break",
            NodeKind::Link => "link",
            NodeKind::Image => "image",
            NodeKind::LinkReference => "linkReference",
            NodeKind::ImageReference => "imageReference",
            NodeKind::Toml => "toml",
            NodeKind::Yaml => "yaml",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heading node (# to ######)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub depth: u8,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Paragraph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Blockquote node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blockquote {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// List node (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(default)]
    pub spread: bool,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// List item node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub spread: bool,
    /// Task list state; `None` for a plain item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Code block node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    pub value: String,
}

/// Raw HTML node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Html {
    pub value: String,
}

/// Link reference definition (`[id]: url "title"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Table node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub align: Vec<Option<Align>>,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Table row node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Table cell node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Table alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// Emphasis node (*text* or _text_)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Strong node (**text** or __text__)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Strikethrough node (~~text~~)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Inline code node (`code`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineCode {
    pub value: String,
}

/// Link node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Image node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// How a reference was written in the source
///
/// <https://spec.commonmark.org/0.30/#link-reference-definitions>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    /// `[id]`
    Shortcut,
    /// `[id][]`
    Collapsed,
    /// `[label][id]`
    Full,
}

/// Link through a definition (`[label][id]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkReference {
    pub identifier: String,
    /// Human-readable label as written in the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub reference_type: ReferenceType,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Image through a definition (`![alt][id]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    pub reference_type: ReferenceType,
}

/// TOML front matter block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toml {
    pub value: String,
}

/// YAML front matter block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yaml {
    pub value: String,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Heading(_) => NodeKind::Heading,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::ThematicBreak => NodeKind::ThematicBreak,
            Node::Blockquote(_) => NodeKind::Blockquote,
            Node::List(_) => NodeKind::List,
            Node::ListItem(_) => NodeKind::ListItem,
            Node::Code(_) => NodeKind::Code,
            Node::Html(_) => NodeKind::Html,
            Node::Definition(_) => NodeKind::Definition,
            Node::Table(_) => NodeKind::Table,
            Node::TableRow(_) => NodeKind::TableRow,
            Node::TableCell(_) => NodeKind::TableCell,
            Node::Text(_) => NodeKind::Text,
            Node::Emphasis(_) => NodeKind::Emphasis,
            Node::Strong(_) => NodeKind::Strong,
            Node::Delete(_) => NodeKind::Delete,
            Node::InlineCode(_) => NodeKind::InlineCode,
            Node::Break => NodeKind::Break,
            Node::Link(_) => NodeKind::Link,
            Node::Image(_) => NodeKind::Image,
            Node::LinkReference(_) => NodeKind::LinkReference,
            Node::ImageReference(_) => NodeKind::ImageReference,
            Node::Toml(_) => NodeKind::Toml,
            Node::Yaml(_) => NodeKind::Yaml,
        }
    }

    /// Children of a parent node, `None` for leaves
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Heading(Heading { children, .. })
            | Node::Paragraph(Paragraph { children })
            | Node::Blockquote(Blockquote { children })
            | Node::List(List { children, .. })
            | Node::ListItem(ListItem { children, .. })
            | Node::Table(Table { children, .. })
            | Node::TableRow(TableRow { children })
            | Node::TableCell(TableCell { children })
            | Node::Emphasis(Emphasis { children })
            | Node::Strong(Strong { children })
            | Node::Delete(Delete { children })
            | Node::Link(Link { children, .. })
            | Node::LinkReference(LinkReference { children, .. }) => Some(children.as_slice()),
            Node::ThematicBreak
            | Node::Code(_)
            | Node::Html(_)
            | Node::Definition(_)
            | Node::Text(_)
            | Node::InlineCode(_)
            | Node::Break
            | Node::Image(_)
            | Node::ImageReference(_)
            | Node::Toml(_)
            | Node::Yaml(_) => None,
        }
    }
}

/// Concatenated text content of a node sequence
pub fn plain_text(nodes: &[Node]) -> String {
    let mut result = String::new();
    for node in nodes {
        collect_text(node, &mut result);
    }
    result
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(Text { value }) | Node::InlineCode(InlineCode { value }) => out.push_str(value),
        Node::Image(Image { alt: Some(alt), .. })
        | Node::ImageReference(ImageReference { alt: Some(alt), .. }) => out.push_str(alt),
        Node::Break => out.push(' '),
        _ => {
            if let Some(children) = node.children() {
                for child in children {
                    collect_text(child, out);
                }
            }
        }
    }
}

// Convenience constructors
impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(Text { value: s.into() })
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph { children })
    }

    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading(Heading { depth, children })
    }

    pub fn code(lang: Option<String>, value: impl Into<String>) -> Self {
        Node::Code(Code {
            lang,
            meta: None,
            value: value.into(),
        })
    }

    pub fn inline_code(value: impl Into<String>) -> Self {
        Node::InlineCode(InlineCode {
            value: value.into(),
        })
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Node::Emphasis(Emphasis { children })
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong(Strong { children })
    }

    pub fn delete(children: Vec<Node>) -> Self {
        Node::Delete(Delete { children })
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link(Link {
            url: url.into(),
            title: None,
            children,
        })
    }

    pub fn link_with_title(
        url: impl Into<String>,
        title: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Node::Link(Link {
            url: url.into(),
            title: Some(title.into()),
            children,
        })
    }

    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Node::Image(Image {
            url: url.into(),
            title: None,
            alt: Some(alt.into()),
        })
    }

    pub fn link_reference(
        identifier: impl Into<String>,
        reference_type: ReferenceType,
        children: Vec<Node>,
    ) -> Self {
        Node::LinkReference(LinkReference {
            identifier: identifier.into(),
            label: None,
            reference_type,
            children,
        })
    }

    pub fn image_reference(
        identifier: impl Into<String>,
        reference_type: ReferenceType,
        alt: Option<String>,
    ) -> Self {
        Node::ImageReference(ImageReference {
            identifier: identifier.into(),
            label: None,
            alt,
            reference_type,
        })
    }

    pub fn definition(identifier: impl Into<String>, url: impl Into<String>) -> Self {
        Node::Definition(Definition {
            identifier: identifier.into(),
            label: None,
            url: url.into(),
            title: None,
        })
    }

    pub fn list(ordered: bool, children: Vec<Node>) -> Self {
        Node::List(List {
            ordered,
            start: if ordered { Some(1) } else { None },
            spread: false,
            children,
        })
    }

    pub fn ordered_list_from(start: u32, children: Vec<Node>) -> Self {
        Node::List(List {
            ordered: true,
            start: Some(start),
            spread: false,
            children,
        })
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem(ListItem {
            spread: false,
            checked: None,
            children,
        })
    }

    pub fn task_item(checked: bool, children: Vec<Node>) -> Self {
        Node::ListItem(ListItem {
            spread: false,
            checked: Some(checked),
            children,
        })
    }

    pub fn table(align: Vec<Option<Align>>, children: Vec<Node>) -> Self {
        Node::Table(Table { align, children })
    }

    pub fn table_row(children: Vec<Node>) -> Self {
        Node::TableRow(TableRow { children })
    }

    pub fn table_cell(children: Vec<Node>) -> Self {
        Node::TableCell(TableCell { children })
    }

    pub fn html(value: impl Into<String>) -> Self {
        Node::Html(Html {
            value: value.into(),
        })
    }

    pub fn toml(value: impl Into<String>) -> Self {
        Node::Toml(Toml {
            value: value.into(),
        })
    }

    pub fn blockquote(children: Vec<Node>) -> Self {
        Node::Blockquote(Blockquote { children })
    }

    pub fn thematic_break() -> Self {
        Node::ThematicBreak
    }

    pub fn line_break() -> Self {
        Node::Break
    }
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}
