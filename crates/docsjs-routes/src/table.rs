//! Route table with navigation queries.
//!
//! A [`RouteTable`] is built once at startup from the collection trees and is
//! immutable afterwards, so it can be shared freely between request handlers.
//!
//! # Path conventions
//!
//! Page hrefs are relative to their collection (`/empezando/introduccion`).
//! Sidebar and breadcrumb links are absolute site paths
//! (`/docs/zustand/empezando/introduccion`).

use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builtin::builtin_routes;
use crate::flatten::{Page, collect, join_href};
use crate::node::RouteNode;

/// Error loading a route file.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Failed to read route file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid route file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Top-level route '{0}' has no collection name")]
    MissingName(String),
}

/// Previous and next pages around a path. No wraparound at the ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Adjacent<'a> {
    pub prev: Option<&'a Page>,
    pub next: Option<&'a Page>,
}

/// Sidebar navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Absolute site path.
    pub href: String,
    /// Section header that should not be rendered as a link.
    #[serde(rename = "noLink", skip_serializing_if = "std::ops::Not::not")]
    pub no_link: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    pub title: String,
    /// Absolute site path, absent for section headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// One pre-renderable page: collection name plus slug segments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaticPath {
    pub name: String,
    pub slug: Vec<String>,
}

/// On-disk shape of a route file.
#[derive(Deserialize)]
struct RouteFile {
    #[serde(default)]
    collections: Vec<RouteNode>,
}

/// Collection trees with their flattened pages.
#[derive(Debug)]
pub struct RouteTable {
    collections: Vec<RouteNode>,
    pages: Vec<Page>,
    /// Page range of every top-level node, keyed by collection name.
    ranges: Vec<(String, Range<usize>)>,
}

impl RouteTable {
    /// Build a table from top-level collection nodes.
    ///
    /// Nodes are flattened one by one, so the combined page list keeps
    /// collection order followed by authoring order.
    #[must_use]
    pub fn new(collections: Vec<RouteNode>) -> Self {
        let mut pages = Vec::new();
        let mut ranges = Vec::with_capacity(collections.len());
        for node in &collections {
            let start = pages.len();
            collect(node, "", &mut pages);
            let name = node.name.clone().unwrap_or_default();
            ranges.push((name, start..pages.len()));
        }
        Self {
            collections,
            pages,
            ranges,
        }
    }

    /// Build a table from the built-in collections.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_routes())
    }

    /// Load collections from a TOML file with a `[[collections]]` array.
    pub fn load(path: &Path) -> Result<Self, RouteError> {
        let source = std::fs::read_to_string(path).map_err(|source| RouteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: RouteFile = toml::from_str(&source).map_err(|source| RouteError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(node) = file.collections.iter().find(|n| n.name.is_none()) {
            return Err(RouteError::MissingName(node.title.clone()));
        }
        tracing::debug!(path = %path.display(), count = file.collections.len(), "Loaded route file");
        Ok(Self::new(file.collections))
    }

    /// All pages of all collections, in sidebar order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Top-level collection nodes.
    #[must_use]
    pub fn collections(&self) -> &[RouteNode] {
        &self.collections
    }

    /// Check whether a collection has any route tree.
    #[must_use]
    pub fn has_collection(&self, name: &str) -> bool {
        self.ranges.iter().any(|(n, _)| n == name)
    }

    /// Pages belonging to one collection.
    pub fn collection_pages<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Page> {
        self.ranges
            .iter()
            .filter(move |(n, _)| n == name)
            .flat_map(|(_, range)| &self.pages[range.clone()])
    }

    /// Previous/next pages around `path` in the combined page list.
    ///
    /// The first page whose href equals `path` wins. Unknown paths have no
    /// neighbours.
    #[must_use]
    pub fn adjacent(&self, path: &str) -> Adjacent<'_> {
        let pages: Vec<&Page> = self.pages.iter().collect();
        find_adjacent(&pages, path)
    }

    /// Previous/next pages around `path`, restricted to one collection.
    #[must_use]
    pub fn adjacent_in(&self, name: &str, path: &str) -> Adjacent<'_> {
        let pages: Vec<&Page> = self.collection_pages(name).collect();
        find_adjacent(&pages, path)
    }

    /// Sidebar tree for a collection, with absolute `/docs/{name}/...` hrefs.
    #[must_use]
    pub fn navigation(&self, name: &str) -> Vec<NavItem> {
        let base = format!("/docs/{name}");
        self.collections_named(name)
            .map(|node| nav_item(node, &base))
            .collect()
    }

    /// Ancestor chain of `path` within a collection, outermost first.
    ///
    /// Returns an empty list when no route matches the path.
    #[must_use]
    pub fn breadcrumbs(&self, name: &str, path: &str) -> Vec<BreadcrumbItem> {
        let target = join_href("", path);
        let base = format!("/docs/{name}");
        let mut chain = Vec::new();
        for node in self.collections_named(name) {
            if find_chain(node, "", &target, &mut chain) {
                return chain
                    .into_iter()
                    .map(|(node, href)| BreadcrumbItem {
                        title: node.title.clone(),
                        href: (!node.no_link).then(|| join_href(&base, &href)),
                    })
                    .collect();
            }
        }
        Vec::new()
    }

    /// One entry per page, split into slug segments.
    #[must_use]
    pub fn static_paths(&self) -> Vec<StaticPath> {
        self.ranges
            .iter()
            .flat_map(|(name, range)| {
                self.pages[range.clone()].iter().map(move |page| StaticPath {
                    name: name.clone(),
                    slug: page
                        .href
                        .split('/')
                        .filter(|s| !s.is_empty())
                        .map(ToOwned::to_owned)
                        .collect(),
                })
            })
            .collect()
    }

    fn collections_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RouteNode> + 'a {
        self.collections
            .iter()
            .filter(move |node| node.name.as_deref() == Some(name))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn find_adjacent<'a>(pages: &[&'a Page], path: &str) -> Adjacent<'a> {
    let target = join_href("", path);
    let Some(index) = pages.iter().position(|page| page.href == target) else {
        return Adjacent::default();
    };
    Adjacent {
        prev: index.checked_sub(1).map(|i| pages[i]),
        next: pages.get(index + 1).copied(),
    }
}

fn nav_item(node: &RouteNode, parent: &str) -> NavItem {
    let href = join_href(parent, &node.href);
    NavItem {
        title: node.title.clone(),
        children: node.items.iter().map(|child| nav_item(child, &href)).collect(),
        href,
        no_link: node.no_link,
        tag: node.tag.clone(),
    }
}

fn find_chain<'a>(
    node: &'a RouteNode,
    parent: &str,
    target: &str,
    chain: &mut Vec<(&'a RouteNode, String)>,
) -> bool {
    let href = join_href(parent, &node.href);
    let is_prefix = href == "/" || target.starts_with(&format!("{href}/"));
    if href != target && !is_prefix {
        return false;
    }
    chain.push((node, href.clone()));
    if href == target {
        return true;
    }
    if node.items.iter().any(|child| find_chain(child, &href, target, chain)) {
        return true;
    }
    chain.pop();
    false
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(RouteTable: Send, Sync);

    fn table() -> RouteTable {
        RouteTable::new(vec![
            RouteNode::section("Guia de Zustand", "/empezando")
                .with_name("zustand")
                .with_items(vec![
                    RouteNode::page("Introduction", "/introduccion"),
                    RouteNode::page("Guías", "/guias").with_items(vec![
                        RouteNode::page("Tutorial", "/tutorial"),
                        RouteNode::page("Estado", "/estado").with_tag("New"),
                    ]),
                ]),
            RouteNode::page("TypeScript", "/documentacion")
                .with_name("typescript")
                .with_items(vec![RouteNode::page("Manual", "/manual")]),
        ])
    }

    #[test]
    fn test_pages_combined_in_order() {
        let table = table();
        let hrefs: Vec<&str> = table.pages().iter().map(|p| p.href.as_str()).collect();

        assert_eq!(
            hrefs,
            vec![
                "/empezando/introduccion",
                "/empezando/guias",
                "/empezando/guias/tutorial",
                "/empezando/guias/estado",
                "/documentacion",
                "/documentacion/manual",
            ]
        );
    }

    #[test]
    fn test_adjacent_middle() {
        let table = table();

        let adjacent = table.adjacent("empezando/guias");

        assert_eq!(adjacent.prev.unwrap().title, "Introduction");
        assert_eq!(adjacent.next.unwrap().title, "Tutorial");
    }

    #[test]
    fn test_adjacent_boundaries() {
        let table = table();

        let first = table.adjacent("/empezando/introduccion");
        let last = table.adjacent("/documentacion/manual");

        assert!(first.prev.is_none());
        assert_eq!(first.next.unwrap().href, "/empezando/guias");
        assert_eq!(last.prev.unwrap().href, "/documentacion");
        assert!(last.next.is_none());
    }

    #[test]
    fn test_adjacent_matches_list_neighbours() {
        let table = table();
        let pages = table.pages();

        for (i, page) in pages.iter().enumerate() {
            let adjacent = table.adjacent(&page.href);
            assert_eq!(adjacent.prev, i.checked_sub(1).map(|j| &pages[j]));
            assert_eq!(adjacent.next, pages.get(i + 1));
        }
    }

    #[test]
    fn test_adjacent_unknown_path() {
        assert_eq!(table().adjacent("/nope"), Adjacent::default());
    }

    #[test]
    fn test_adjacent_in_stays_within_collection() {
        let table = table();

        let combined = table.adjacent("/documentacion");
        let scoped = table.adjacent_in("typescript", "/documentacion");

        assert_eq!(combined.prev.unwrap().href, "/empezando/guias/estado");
        assert!(scoped.prev.is_none());
        assert_eq!(scoped.next.unwrap().href, "/documentacion/manual");
    }

    #[test]
    fn test_navigation_prefixes_collection() {
        let nav = table().navigation("zustand");

        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].href, "/docs/zustand/empezando");
        assert!(nav[0].no_link);
        assert_eq!(nav[0].children[1].href, "/docs/zustand/empezando/guias");
        assert_eq!(
            nav[0].children[1].children[1].tag.as_deref(),
            Some("New")
        );
    }

    #[test]
    fn test_navigation_unknown_collection() {
        assert!(table().navigation("react").is_empty());
    }

    #[test]
    fn test_navigation_serialization() {
        let nav = table().navigation("typescript");
        let json = serde_json::to_value(&nav).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "title": "TypeScript",
                "href": "/docs/typescript/documentacion",
                "children": [{"title": "Manual", "href": "/docs/typescript/documentacion/manual"}]
            }])
        );
    }

    #[test]
    fn test_breadcrumbs() {
        let crumbs = table().breadcrumbs("zustand", "empezando/guias/tutorial");

        assert_eq!(
            crumbs,
            vec![
                BreadcrumbItem {
                    title: "Guia de Zustand".to_owned(),
                    href: None,
                },
                BreadcrumbItem {
                    title: "Guías".to_owned(),
                    href: Some("/docs/zustand/empezando/guias".to_owned()),
                },
                BreadcrumbItem {
                    title: "Tutorial".to_owned(),
                    href: Some("/docs/zustand/empezando/guias/tutorial".to_owned()),
                },
            ]
        );
    }

    #[test]
    fn test_breadcrumbs_unknown_path() {
        assert!(table().breadcrumbs("zustand", "empezando/otro").is_empty());
    }

    #[test]
    fn test_static_paths() {
        let paths = table().static_paths();

        assert_eq!(paths.len(), 6);
        assert_eq!(
            paths[2],
            StaticPath {
                name: "zustand".to_owned(),
                slug: vec!["empezando".to_owned(), "guias".to_owned(), "tutorial".to_owned()],
            }
        );
        assert_eq!(paths[4].name, "typescript");
    }

    #[test]
    fn test_has_collection() {
        let table = table();

        assert!(table.has_collection("zustand"));
        assert!(!table.has_collection("react"));
    }

    #[test]
    fn test_load_route_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("routes.toml");
        std::fs::write(
            &path,
            r#"
[[collections]]
name = "express"
title = "Express"
href = "/empezando"
no_link = true

[[collections.items]]
title = "Instalacion"
href = "/instalacion"
"#,
        )
        .unwrap();

        let table = RouteTable::load(&path).unwrap();

        assert_eq!(table.pages().len(), 1);
        assert_eq!(table.pages()[0].href, "/empezando/instalacion");
        assert!(table.has_collection("express"));
    }

    #[test]
    fn test_load_requires_collection_name() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("routes.toml");
        std::fs::write(&path, "[[collections]]\ntitle = \"Nameless\"\nhref = \"/x\"\n").unwrap();

        let err = RouteTable::load(&path).unwrap_err();

        assert!(matches!(err, RouteError::MissingName(title) if title == "Nameless"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RouteTable::load(Path::new("/nonexistent/routes.toml")).unwrap_err();

        assert!(matches!(err, RouteError::Io { .. }));
    }
}
