//! Static navigation route tables for the docsjs site.
//!
//! Every documentation collection (a technology such as `zustand` or
//! `typescript`) is described by a hand-authored tree of [`RouteNode`]s.
//! [`flatten`] turns such trees into the ordered [`Page`] list that drives the
//! sidebar, previous/next pagination and static-path generation.
//!
//! [`RouteTable`] bundles the trees with their flattened pages and answers
//! navigation queries. The built-in trees live in [`builtin_routes`]; a TOML
//! file with the same shape can replace them via [`RouteTable::load`].
//!
//! # Example
//!
//! ```
//! use docsjs_routes::{RouteNode, flatten};
//!
//! let tree = vec![RouteNode::page("A", "/a").with_items(vec![RouteNode::page("B", "/b")])];
//! let pages = flatten(&tree);
//!
//! assert_eq!(pages[1].href, "/a/b");
//! ```

mod builtin;
mod catalog;
mod flatten;
mod node;
mod table;

pub use builtin::builtin_routes;
pub use catalog::{Technology, technologies};
pub use flatten::{Page, flatten, join_href};
pub use node::RouteNode;
pub use table::{Adjacent, BreadcrumbItem, NavItem, RouteError, RouteTable, StaticPath};
