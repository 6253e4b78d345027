//! hast (HTML Abstract Syntax Tree) types
//!
//! Shortcuts for creating HTML nodes, modeled on hastscript.
//! Reference: https://github.com/syntax-tree/hast

use indexmap::IndexMap;
use std::fmt;

/// Element properties, written out in insertion order
pub type Properties = IndexMap<String, PropertyValue>;

/// Value of a single element property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    String(String),
    /// Boolean attribute: `true` writes the bare key, `false` omits it
    Bool(bool),
    /// Space-separated list, e.g. `class`
    List(Vec<String>),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::List(value)
    }
}

/// An hast node
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    Root(Vec<HtmlNode>),
    Element(Element),
    Text(String),
    /// Pre-formatted markup, written verbatim
    Raw(String),
    Comment(String),
    Doctype,
}

/// Field-less mirror of [`HtmlNode`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlNodeKind {
    Root,
    Element,
    Text,
    Raw,
    Comment,
    Doctype,
}

impl HtmlNodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HtmlNodeKind::Root => "root",
            HtmlNodeKind::Element => "element",
            HtmlNodeKind::Text => "text",
            HtmlNodeKind::Raw => "raw",
            HtmlNodeKind::Comment => "comment",
            HtmlNodeKind::Doctype => "doctype",
        }
    }
}

impl fmt::Display for HtmlNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTML element
///
/// The tag name is fixed at construction; use the accessors to read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag_name: String,
    properties: Properties,
    content: ElementContent,
}

/// Body of an element
#[derive(Debug, Clone, PartialEq)]
pub enum ElementContent {
    /// Child nodes, the common case
    Children(Vec<HtmlNode>),
    /// Opaque string body of a `script` or `style` element
    Literal(String),
}

/// Tags whose body is an opaque string rather than child nodes
const LITERAL_TAGS: &[&str] = &["script", "style"];

/// Whether `tag_name` holds a literal body instead of children
pub fn is_literal_tag(tag_name: &str) -> bool {
    LITERAL_TAGS.contains(&tag_name)
}

impl Element {
    /// Element with child nodes
    pub(crate) fn parent(
        tag_name: impl Into<String>,
        properties: Properties,
        children: Vec<HtmlNode>,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties,
            content: ElementContent::Children(children),
        }
    }

    /// Element with a literal string body
    pub(crate) fn literal(
        tag_name: impl Into<String>,
        properties: Properties,
        value: impl Into<String>,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties,
            content: ElementContent::Literal(value.into()),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn content(&self) -> &ElementContent {
        &self.content
    }

    /// Child nodes, `None` for a literal element
    pub fn children(&self) -> Option<&[HtmlNode]> {
        match &self.content {
            ElementContent::Children(children) => Some(children.as_slice()),
            ElementContent::Literal(_) => None,
        }
    }

    /// Append a property, replacing any earlier value for the same key in place
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl HtmlNode {
    pub fn kind(&self) -> HtmlNodeKind {
        match self {
            HtmlNode::Root(_) => HtmlNodeKind::Root,
            HtmlNode::Element(_) => HtmlNodeKind::Element,
            HtmlNode::Text(_) => HtmlNodeKind::Text,
            HtmlNode::Raw(_) => HtmlNodeKind::Raw,
            HtmlNode::Comment(_) => HtmlNodeKind::Comment,
            HtmlNode::Doctype => HtmlNodeKind::Doctype,
        }
    }

    pub fn root(children: Vec<HtmlNode>) -> Self {
        HtmlNode::Root(children)
    }

    /// Creates an element using tag name and children.
    pub fn elem(tag_name: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::elem_props(tag_name, Properties::new(), children)
    }

    /// Creates an element using tag name, properties and children.
    ///
    /// For a literal tag the text and raw values of `children` are joined
    /// into its body.
    pub fn elem_props(
        tag_name: impl Into<String>,
        properties: Properties,
        children: Vec<HtmlNode>,
    ) -> Self {
        let tag_name = tag_name.into();
        if is_literal_tag(&tag_name) {
            let body: String = children
                .iter()
                .filter_map(|child| match child {
                    HtmlNode::Text(value) | HtmlNode::Raw(value) => Some(value.as_str()),
                    _ => None,
                })
                .collect();
            HtmlNode::Element(Element::literal(tag_name, properties, body))
        } else {
            HtmlNode::Element(Element::parent(tag_name, properties, children))
        }
    }

    /// Creates an element holding `value`.
    ///
    /// Literal tags (`script`, `style`) take the value as their body; any
    /// other tag gets a single text child.
    pub fn elem_text(tag_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::elem_props_text(tag_name, Properties::new(), value)
    }

    /// [`HtmlNode::elem_text`] with properties.
    pub fn elem_props_text(
        tag_name: impl Into<String>,
        properties: Properties,
        value: impl Into<String>,
    ) -> Self {
        let tag_name = tag_name.into();
        if is_literal_tag(&tag_name) {
            HtmlNode::Element(Element::literal(tag_name, properties, value))
        } else {
            HtmlNode::Element(Element::parent(
                tag_name,
                properties,
                vec![Self::text(value)],
            ))
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Text(value.into())
    }

    pub fn raw(value: impl Into<String>) -> Self {
        HtmlNode::Raw(value.into())
    }

    pub fn comment(value: impl Into<String>) -> Self {
        HtmlNode::Comment(value.into())
    }

    pub fn doctype() -> Self {
        HtmlNode::Doctype
    }

    /// The element payload, if this is an element
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            HtmlNode::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// Builds [`Properties`] from key/value pairs, keeping their order
///
/// ```rust
/// use md2html_hast::{PropertyValue, nodes::props};
///
/// let p = props([("class", PropertyValue::from("x")), ("id", "y".into())]);
/// assert_eq!(p.keys().collect::<Vec<_>>(), ["class", "id"]);
/// ```
pub fn props<K, const N: usize>(pairs: [(K, PropertyValue); N]) -> Properties
where
    K: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elem_text_for_parent_tag() {
        let node = HtmlNode::elem_text("p", "hello");
        let el = node.as_element().unwrap();
        assert_eq!(el.tag_name(), "p");
        assert_eq!(el.children(), Some(&[HtmlNode::text("hello")][..]));
    }

    #[test]
    fn test_elem_text_for_literal_tag() {
        let node = HtmlNode::elem_text("script", "let a = 1 < 2;");
        let el = node.as_element().unwrap();
        assert!(el.children().is_none());
        assert_eq!(
            el.content(),
            &ElementContent::Literal("let a = 1 < 2;".to_string())
        );
    }

    #[test]
    fn test_elem_props_picks_shape_from_tag() {
        let style = HtmlNode::elem_props(
            "style",
            Properties::new(),
            vec![HtmlNode::text("a > b "), HtmlNode::raw("{}")],
        );
        assert_eq!(
            style.as_element().unwrap().content(),
            &ElementContent::Literal("a > b {}".to_string())
        );

        let p = HtmlNode::elem_props_text("p", props([("id", "x".into())]), "hi");
        let el = p.as_element().unwrap();
        assert_eq!(el.children(), Some(&[HtmlNode::text("hi")][..]));
        assert_eq!(el.properties().len(), 1);

        let script = HtmlNode::elem_props_text("script", props([("defer", true.into())]), "");
        assert!(script.as_element().unwrap().children().is_none());
    }

    #[test]
    fn test_is_literal_tag() {
        assert!(is_literal_tag("script"));
        assert!(is_literal_tag("style"));
        assert!(!is_literal_tag("pre"));
        assert!(!is_literal_tag("Script"));
    }

    #[test]
    fn test_properties_keep_insertion_order() {
        let el = Element::parent("div", Properties::new(), vec![])
            .with_property("id", "y")
            .with_property("class", vec!["a".to_string()])
            .with_property("hidden", true);
        let keys: Vec<_> = el.properties().keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "class", "hidden"]);
    }

    #[test]
    fn test_with_property_replaces_value_in_place() {
        let el = Element::parent("a", Properties::new(), vec![])
            .with_property("href", "/a")
            .with_property("title", "t")
            .with_property("href", "/b");
        let pairs: Vec<_> = el.properties().iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "href");
        assert_eq!(pairs[0].1, &PropertyValue::from("/b"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(HtmlNode::doctype().kind(), HtmlNodeKind::Doctype);
        assert_eq!(HtmlNode::raw("<br>").kind(), HtmlNodeKind::Raw);
        assert_eq!(HtmlNode::root(vec![]).kind(), HtmlNodeKind::Root);
        assert_eq!(HtmlNodeKind::Comment.to_string(), "comment");
    }
}
