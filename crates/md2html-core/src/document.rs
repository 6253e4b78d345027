//! Page template
//!
//! Wraps a rendered body in a complete HTML document:
//!
//! ```text
//! <!doctype html>
//! <html lang="en"><head>...</head><body>...</body></html>
//! ```

use md2html_hast::{HtmlNode, Properties, PropertyValue, props};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Options for the page head
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct PageOptions {
    /// Document language for `<html lang>` (default: "en")
    pub lang: String,
    /// Character set for `<meta charset>` (default: "utf-8")
    pub charset: String,
    /// Page title for `<title>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Content of the viewport meta tag; an empty string omits the tag
    pub viewport: String,
    /// Favicon URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Stylesheet URLs, linked in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stylesheets: Vec<String>,
    /// Script URLs, loaded as deferred modules in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            charset: "utf-8".to_string(),
            title: None,
            viewport: "width=device-width, initial-scale=1.0".to_string(),
            favicon: None,
            stylesheets: Vec::new(),
            scripts: Vec::new(),
        }
    }
}

/// Build `Root[doctype, html[head, body]]` around `body`
pub fn page(body: Vec<HtmlNode>, options: &PageOptions) -> HtmlNode {
    let html = HtmlNode::elem_props(
        "html",
        props([("lang", options.lang.as_str().into())]),
        vec![head(options), HtmlNode::elem("body", body)],
    );
    HtmlNode::root(vec![HtmlNode::doctype(), html])
}

fn head(options: &PageOptions) -> HtmlNode {
    let mut children = vec![meta(props([("charset", options.charset.as_str().into())]))];

    if !options.viewport.is_empty() {
        children.push(meta(props([
            ("name", "viewport".into()),
            ("content", options.viewport.as_str().into()),
        ])));
    }
    if let Some(title) = &options.title {
        children.push(HtmlNode::elem_text("title", title));
    }
    if let Some(favicon) = &options.favicon {
        children.push(link("icon", favicon));
    }
    for href in &options.stylesheets {
        children.push(link("stylesheet", href));
    }
    for src in &options.scripts {
        let properties = props([
            ("defer", PropertyValue::Bool(true)),
            ("src", src.as_str().into()),
            ("type", "module".into()),
        ]);
        children.push(HtmlNode::elem_props_text("script", properties, ""));
    }

    HtmlNode::elem("head", children)
}

fn meta(properties: Properties) -> HtmlNode {
    HtmlNode::elem_props("meta", properties, vec![])
}

fn link(rel: &str, href: &str) -> HtmlNode {
    HtmlNode::elem_props(
        "link",
        props([("rel", rel.into()), ("href", href.into())]),
        vec![],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use md2html_hast::{WriterOptions, write_to_string};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_structure() {
        let tree = page(vec![HtmlNode::elem_text("p", "foo")], &PageOptions::default());
        let HtmlNode::Root(children) = &tree else {
            panic!("Expected Root node");
        };
        assert_eq!(children[0], HtmlNode::Doctype);
        let html = children[1].as_element().unwrap();
        assert_eq!(html.tag_name(), "html");
        let tags: Vec<_> = html
            .children()
            .unwrap()
            .iter()
            .filter_map(HtmlNode::as_element)
            .map(|el| el.tag_name())
            .collect();
        assert_eq!(tags, ["head", "body"]);
    }

    #[test]
    fn test_head_order() {
        let options = PageOptions {
            title: Some("Post".to_string()),
            viewport: String::new(),
            favicon: Some("/favicon.ico".to_string()),
            stylesheets: vec!["/style/main.css".to_string()],
            scripts: vec!["/baz.js".to_string()],
            ..Default::default()
        };
        let html = write_to_string(&head(&options), &WriterOptions::default());
        assert_eq!(
            html,
            concat!(
                r#"<head><meta charset="utf-8"><title>Post</title>"#,
                r#"<link rel="icon" href="/favicon.ico">"#,
                r#"<link rel="stylesheet" href="/style/main.css">"#,
                r#"<script defer src="/baz.js" type="module"></script></head>"#,
            )
        );
    }

    #[test]
    fn test_default_page_writes_viewport() {
        let tree = page(vec![HtmlNode::elem_text("p", "hi")], &PageOptions::default());
        let html = write_to_string(&tree, &WriterOptions::default());
        assert_eq!(
            html,
            concat!(
                "<!doctype html>\n",
                r#"<html lang="en"><head><meta charset="utf-8">"#,
                r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"></head>"#,
                "\n<body>\n  <p>hi</p></body></html>",
            )
        );
    }
}
