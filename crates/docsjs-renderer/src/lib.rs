//! MDX document compiler for docsjs.
//!
//! Turns a document body (markdown with whole-line JSX component tags) into
//! HTML plus the list of headings it contains.
//!
//! # Architecture
//!
//! Compilation runs in two steps:
//! - A line-based pass expands component tags (`<Note>`, `<Tabs>`, ...) into
//!   HTML blocks using the [`ComponentRegistry`]
//! - A [`MarkdownRenderer`] walks the pulldown-cmark events and delegates
//!   overridable constructs (tables, images, links, code blocks) to the
//!   registry, falling back to a [`RenderBackend`] for the rest
//!
//! Heading anchors come from [`slugify`], shared by the renderer and
//! [`extract_headings`] so table of contents links always match body ids.
//!
//! # Example
//!
//! ```
//! use docsjs_renderer::Compiler;
//!
//! let body = Compiler::default().compile("# Hola\n\n**Negrita**").unwrap();
//! assert_eq!(body.headings[0].href, "#hola");
//! ```

mod backend;
mod code_block;
mod compile;
mod components;
mod headings;
mod html;
mod renderer;
mod slug;
mod state;

pub use backend::RenderBackend;
pub use compile::{CompileError, CompiledBody, Compiler};
pub use components::{Attrs, Component, ComponentRegistry, Element};
pub use headings::extract_headings;
pub use html::HtmlBackend;
pub use renderer::{MarkdownRenderer, RenderResult, parser_options};
pub use slug::{anchor_href, slugify};
pub use state::{Heading, escape_html};
