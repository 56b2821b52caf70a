//! Render backend trait for format-specific rendering.
//!
//! The backend supplies the baseline markup for every construct. Component
//! overrides from the [`ComponentRegistry`](crate::ComponentRegistry) take
//! precedence where registered.

use std::fmt::Write;

/// Backend trait for format-specific rendering operations.
pub trait RenderBackend {
    /// Render a code block.
    ///
    /// # Arguments
    ///
    /// * `lang` - Optional language identifier (e.g., "ts", "bash")
    /// * `content` - The code content
    /// * `out` - Output buffer to write to
    fn code_block(lang: Option<&str>, content: &str, out: &mut String);

    /// Render blockquote start tag.
    fn blockquote_start(out: &mut String);

    /// Render blockquote end tag.
    fn blockquote_end(out: &mut String);

    /// Render an image.
    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Render a complete heading.
    ///
    /// `html` is the already rendered inline content; `id` is the anchor slug.
    fn heading(level: u8, id: &str, html: &str, out: &mut String) {
        write!(out, r#"<h{level} id="{id}">{}</h{level}>"#, html.trim()).unwrap();
    }

    /// Render a link opening tag. `href` is already escaped.
    fn link_start(href: &str, out: &mut String) {
        write!(out, r#"<a href="{href}">"#).unwrap();
    }

    /// Render a link closing tag.
    fn link_end(out: &mut String) {
        out.push_str("</a>");
    }

    /// Render a hard break.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a horizontal rule.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }

    /// Render a task list marker.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}
