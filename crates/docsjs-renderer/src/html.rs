//! HTML backend for markdown rendering.
//!
//! Produces semantic HTML5 output suitable for web display.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::state::escape_html;

/// HTML render backend.
///
/// Produces semantic HTML5 with:
/// - `<pre><code>` for code blocks
/// - `<blockquote>` for blockquotes
/// - `<img>` for images
/// - Self-linking headings (an empty anchor is prepended to the content)
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        if let Some(lang) = lang {
            write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(lang),
                escape_html(content)
            )
            .unwrap();
        } else {
            write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
        }
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }

    fn heading(level: u8, id: &str, html: &str, out: &mut String) {
        write!(
            out,
            r##"<h{level} id="{id}"><a aria-hidden="true" tabindex="-1" href="#{id}"><span class="icon icon-link"></span></a>{}</h{level}>"##,
            html.trim()
        )
        .unwrap();
    }
}
