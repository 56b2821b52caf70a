//! Depth-first flattening of navigation trees.

use serde::{Deserialize, Serialize};

use crate::node::RouteNode;

/// A flattened navigation entry with an absolute `href`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub href: String,
}

/// Flatten route trees into pages in depth-first pre-order.
///
/// Section headers (`no_link`) emit nothing but still prefix their
/// descendants. Output order equals authoring order.
#[must_use]
pub fn flatten(tree: &[RouteNode]) -> Vec<Page> {
    let mut pages = Vec::new();
    for node in tree {
        collect(node, "", &mut pages);
    }
    pages
}

pub(crate) fn collect(node: &RouteNode, parent: &str, pages: &mut Vec<Page>) {
    let href = join_href(parent, &node.href);
    if !node.no_link {
        pages.push(Page {
            title: node.title.clone(),
            href: href.clone(),
        });
    }
    for child in &node.items {
        collect(child, &href, pages);
    }
}

/// Join a parent path and a relative segment without doubling separators.
///
/// Blank segments leave the parent unchanged. The result always starts with `/`.
///
/// ```
/// use docsjs_routes::join_href;
///
/// assert_eq!(join_href("/a/", "/b"), "/a/b");
/// assert_eq!(join_href("/a", "  "), "/a");
/// assert_eq!(join_href("", "b"), "/b");
/// ```
#[must_use]
pub fn join_href(parent: &str, child: &str) -> String {
    let parent = parent.trim().trim_end_matches('/');
    let child = child.trim().trim_matches('/');

    let mut href = String::with_capacity(parent.len() + child.len() + 2);
    if !parent.starts_with('/') {
        href.push('/');
    }
    href.push_str(parent);
    if !child.is_empty() {
        if !href.ends_with('/') {
            href.push('/');
        }
        href.push_str(child);
    }
    href
}
