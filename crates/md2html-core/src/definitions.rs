//! Link reference definitions
//!
//! Definitions (`[id]: url "title"`) are gathered from the whole document
//! before rendering and consulted read-only while references render.

use md2html_mdast::{Node, Root};
use std::collections::HashMap;

/// Where a definition points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub url: String,
    pub title: Option<String>,
}

impl LinkTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
        }
    }

    pub fn with_title(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: Some(title.into()),
        }
    }
}

/// Identifier to target table
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    entries: HashMap<String, LinkTarget>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every definition node in the document
    pub fn collect(root: &Root) -> Self {
        let mut definitions = Self::new();
        definitions.collect_from(&root.children);
        definitions
    }

    fn collect_from(&mut self, nodes: &[Node]) {
        for node in nodes {
            if let Node::Definition(def) = node {
                let target = LinkTarget {
                    url: def.url.clone(),
                    title: def.title.clone(),
                };
                if !self.insert(&def.identifier, target) {
                    tracing::debug!(identifier = %def.identifier, "duplicate definition ignored");
                }
            }
            if let Some(children) = node.children() {
                self.collect_from(children);
            }
        }
    }

    /// Add a definition; returns `false` if the identifier was already defined
    ///
    /// The first definition of an identifier wins, as in CommonMark.
    pub fn insert(&mut self, identifier: &str, target: LinkTarget) -> bool {
        let key = normalize_identifier(identifier);
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, target);
        true
    }

    pub fn get(&self, identifier: &str) -> Option<&LinkTarget> {
        self.entries.get(&normalize_identifier(identifier))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize a reference label for matching
///
/// Trims, collapses inner whitespace runs to one space, and lowercases.
pub fn normalize_identifier(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
