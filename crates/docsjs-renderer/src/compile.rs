//! Document body compilation: components, markdown and headings in one pass.

use crate::components::{ComponentRegistry, preprocess};
use crate::headings::extract_headings;
use crate::html::HtmlBackend;
use crate::renderer::MarkdownRenderer;
use crate::state::Heading;

/// Error raised when a document body cannot be compiled.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A JSX tag names a component missing from the registry.
    #[error("Unknown component <{name}> on line {line}")]
    UnknownComponent { name: String, line: usize },

    /// A component opened on `line` was never closed.
    #[error("Component <{name}> opened on line {line} is not closed")]
    UnclosedTag { name: String, line: usize },

    /// A closing tag without a matching open component.
    #[error("Unexpected closing tag </{name}> on line {line}")]
    UnexpectedClose { name: String, line: usize },
}

/// Compiled document body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledBody {
    /// Renderable HTML.
    pub html: String,
    /// Headings in document order; hrefs match the ids in `html`.
    pub headings: Vec<Heading>,
}

/// Compiles MDX document bodies with a fixed component registry.
///
/// ```
/// use docsjs_renderer::Compiler;
///
/// let compiler = Compiler::default();
/// let body = compiler
///     .compile("## Instalar\n\n<Note type=\"success\">\nListo.\n</Note>\n")
///     .unwrap();
///
/// assert!(body.html.contains(r#"<h2 id="instalar">"#));
/// assert!(body.html.contains("note-success"));
/// assert_eq!(body.headings[0].href, "#instalar");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    registry: ComponentRegistry,
}

impl Compiler {
    #[must_use]
    pub fn new(registry: ComponentRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Compile a document body (frontmatter already removed) to HTML.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] for unknown or unbalanced component tags.
    pub fn compile(&self, body: &str) -> Result<CompiledBody, CompileError> {
        let source = preprocess(body, &self.registry)?;
        let result = MarkdownRenderer::<HtmlBackend>::new(&self.registry).render_markdown(&source);
        Ok(CompiledBody {
            html: result.html,
            headings: result.headings,
        })
    }

    /// Headings of a document body without rendering it.
    ///
    /// Bodies with broken component markup still yield their headings, read
    /// from the raw markdown.
    #[must_use]
    pub fn headings(&self, body: &str) -> Vec<Heading> {
        match preprocess(body, &self.registry) {
            Ok(source) => extract_headings(&source),
            Err(_) => extract_headings(body),
        }
    }
}
