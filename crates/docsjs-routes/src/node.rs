//! Navigation tree nodes.

use serde::{Deserialize, Serialize};

/// One entry in a navigation tree.
///
/// `href` is a path segment relative to the parent node. Top-level nodes carry
/// the collection `name` they belong to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteNode {
    /// Collection identifier, only set on top-level nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display label.
    pub title: String,
    /// Path segment relative to the parent.
    pub href: String,
    /// Section header: contributes its `href` as a prefix but is not a page.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_link: bool,
    /// Child nodes in authoring order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<RouteNode>,
    /// Optional badge (e.g. "New").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl RouteNode {
    /// Create a navigable page node.
    #[must_use]
    pub fn page(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            ..Self::default()
        }
    }

    /// Create a section header node.
    #[must_use]
    pub fn section(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            no_link: true,
            ..Self::page(title, href)
        }
    }

    /// Set the collection name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set child nodes.
    #[must_use]
    pub fn with_items(mut self, items: Vec<RouteNode>) -> Self {
        self.items = items;
        self
    }

    /// Set a badge.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Count nodes in this subtree that produce a page.
    #[must_use]
    pub fn page_count(&self) -> usize {
        usize::from(!self.no_link) + self.items.iter().map(Self::page_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_section_is_no_link() {
        let node = RouteNode::section("Guías", "/guias");

        assert!(node.no_link);
        assert_eq!(node.title, "Guías");
        assert_eq!(node.href, "/guias");
    }

    #[test]
    fn test_page_count() {
        let tree = RouteNode::section("Root", "/root").with_items(vec![
            RouteNode::page("A", "/a"),
            RouteNode::section("B", "/b").with_items(vec![RouteNode::page("C", "/c")]),
        ]);

        assert_eq!(tree.page_count(), 2);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let source = r#"
name = "zustand"
title = "Guia de Zustand"
href = "/empezando"
no_link = true

[[items]]
title = "Introduction"
href = "/introduccion"
tag = "New"
"#;
        let node: RouteNode = toml::from_str(source).unwrap();

        assert_eq!(node.name.as_deref(), Some("zustand"));
        assert!(node.no_link);
        assert_eq!(node.items.len(), 1);
        assert_eq!(node.items[0].tag.as_deref(), Some("New"));
        assert!(!node.items[0].no_link);
    }

    #[test]
    fn test_serialize_skips_defaults() {
        let json = serde_json::to_value(RouteNode::page("A", "/a")).unwrap();

        assert_eq!(json, serde_json::json!({"title": "A", "href": "/a"}));
    }
}
