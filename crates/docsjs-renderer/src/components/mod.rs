//! Component overrides for document constructs.
//!
//! A [`ComponentRegistry`] maps tag names to [`Component`] renderers. Tags come
//! from two places:
//!
//! - Markdown constructs the renderer emits (`table`, `img`, `a`, `pre`, ...)
//! - Capitalized JSX tags written in content (`<Note>`, `<Tabs>`, ...), which
//!   the [`preprocess`] pass turns into HTML blocks before markdown parsing
//!
//! Markdown constructs without a registered component fall back to the plain
//! [`RenderBackend`](crate::RenderBackend) markup. Unregistered JSX tags are a
//! compile error.

mod attrs;
mod fence;
mod preprocess;
mod render;

use std::collections::HashMap;

pub use attrs::Attrs;
pub(crate) use preprocess::preprocess;

/// Renderer variants for overridable constructs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// Tables and their parts (`table`, `thead`, `tbody`, `tr`, `th`, `td`).
    Table,
    /// Callout box (`Note`).
    Note,
    /// Tabbed panels (`Tabs`, `TabsList`, `TabsTrigger`, `TabsContent`).
    Tabs,
    /// Numbered steps (`Stepper`, `StepperItem`).
    Stepper,
    /// Images (`img`).
    Image,
    /// Links (`a`).
    Link,
    /// Code blocks with optional title bar and copy source (`pre`).
    CodeBlock,
    /// File tree container (`Files`).
    Files,
    /// Child page listing placeholder (`Outlet`).
    Outlet,
}

/// Tag being rendered by a [`Component`].
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    /// Tag name as written (e.g. `TabsTrigger`, `td`).
    pub tag: &'a str,
    pub attrs: &'a Attrs,
}

impl<'a> Element<'a> {
    #[must_use]
    pub fn new(tag: &'a str, attrs: &'a Attrs) -> Self {
        Self { tag, attrs }
    }
}

/// Tag table of the site's standard components.
const STANDARD: &[(&str, Component)] = &[
    ("Tabs", Component::Tabs),
    ("TabsList", Component::Tabs),
    ("TabsTrigger", Component::Tabs),
    ("TabsContent", Component::Tabs),
    ("Note", Component::Note),
    ("Stepper", Component::Stepper),
    ("StepperItem", Component::Stepper),
    ("Files", Component::Files),
    ("Outlet", Component::Outlet),
    ("OutletWrapper", Component::Outlet),
    ("pre", Component::CodeBlock),
    ("img", Component::Image),
    ("a", Component::Link),
    ("table", Component::Table),
    ("thead", Component::Table),
    ("tbody", Component::Table),
    ("tr", Component::Table),
    ("th", Component::Table),
    ("td", Component::Table),
];

/// Lookup table from tag name to component renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentRegistry {
    entries: HashMap<&'static str, Component>,
}

impl ComponentRegistry {
    /// Registry without overrides: everything renders as plain HTML.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry with the site's standard components.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: STANDARD.iter().copied().collect(),
        }
    }

    /// Register (or replace) a tag.
    #[must_use]
    pub fn with(mut self, tag: &'static str, component: Component) -> Self {
        self.entries.insert(tag, component);
        self
    }

    /// Component registered for `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<Component> {
        self.entries.get(tag).copied()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
