//! HTML markup produced by each component.

use std::fmt::Write;

use super::{Component, Element};
use crate::code_block::file_icon;
use crate::state::escape_html;

impl Component {
    /// Write the opening markup for `el`.
    pub fn open(self, el: &Element<'_>, out: &mut String) {
        match self {
            Self::Note => note_open(el, out),
            Self::Tabs => tabs_open(el, out),
            Self::Stepper => stepper_open(el, out),
            Self::Files => out.push_str(r#"<div class="files">"#),
            Self::Outlet => {
                out.push_str(r#"<div class="outlet""#);
                push_attr(out, "data-path", el.attrs.get("path"));
                out.push_str("></div>");
            }
            Self::Table => table_open(el, out),
            Self::Image => image(el, out),
            Self::Link => link_open(el, out),
            // Code blocks only render whole, see `render`.
            Self::CodeBlock => {}
        }
    }

    /// Write the closing markup for `tag`.
    pub fn close(self, tag: &str, out: &mut String) {
        match self {
            Self::Note => out.push_str("</div></div>"),
            Self::Tabs | Self::Files => out.push_str("</div>"),
            Self::Stepper => out.push_str(match tag {
                "StepperItem" => "</div></div>",
                _ => "</div>",
            }),
            Self::Table => match tag {
                "table" => out.push_str("</table></div>"),
                _ => write!(out, "</{tag}>").unwrap(),
            },
            Self::Link => out.push_str("</a>"),
            Self::Image | Self::Outlet | Self::CodeBlock => {}
        }
    }

    /// Render an element whose body is literal text rather than markup.
    ///
    /// Used for code blocks (the body is source code) and tab labels.
    pub fn render(self, el: &Element<'_>, body: &str, out: &mut String) {
        match self {
            Self::CodeBlock => code_block(el, body, out),
            _ => {
                self.open(el, out);
                out.push_str(&escape_html(body));
                self.close(el.tag, out);
            }
        }
    }

    /// Whether single-line content of `tag` is a plain-text label.
    #[must_use]
    pub fn has_inline_label(self, tag: &str) -> bool {
        self == Self::Tabs && tag == "TabsTrigger"
    }
}

/// Append ` name="value"` when a value is present.
fn push_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        write!(out, r#" {name}="{}""#, escape_html(value)).unwrap();
    }
}

fn note_open(el: &Element<'_>, out: &mut String) {
    let kind = match el.attrs.get("type") {
        Some(kind @ ("note" | "danger" | "warning" | "success")) => kind,
        _ => "note",
    };
    let default_title = match kind {
        "danger" => "Peligro",
        "warning" => "Advertencia",
        "success" => "Éxito",
        _ => "Nota",
    };
    let title = el.attrs.get("title").unwrap_or(default_title);
    write!(
        out,
        r#"<div class="note note-{kind}"><p class="note-title">{}</p><div class="note-content">"#,
        escape_html(title)
    )
    .unwrap();
}

fn tabs_open(el: &Element<'_>, out: &mut String) {
    match el.tag {
        "TabsList" => out.push_str(r#"<div class="tabs-list" role="tablist">"#),
        "TabsTrigger" => {
            out.push_str(r#"<div class="tabs-trigger" role="tab""#);
            push_attr(out, "data-value", el.attrs.get("value"));
            out.push('>');
        }
        "TabsContent" => {
            out.push_str(r#"<div class="tabs-content" role="tabpanel""#);
            push_attr(out, "data-value", el.attrs.get("value"));
            out.push('>');
        }
        _ => {
            out.push_str(r#"<div class="tabs""#);
            push_attr(out, "data-default-value", el.attrs.get("defaultValue"));
            out.push('>');
        }
    }
}

fn stepper_open(el: &Element<'_>, out: &mut String) {
    if el.tag == "StepperItem" {
        out.push_str(r#"<div class="stepper-item">"#);
        if let Some(title) = el.attrs.get("title") {
            write!(out, r#"<p class="stepper-title">{}</p>"#, escape_html(title)).unwrap();
        }
        out.push_str(r#"<div class="stepper-content">"#);
    } else {
        out.push_str(r#"<div class="stepper">"#);
    }
}

fn table_open(el: &Element<'_>, out: &mut String) {
    let class = match el.tag {
        "table" => {
            out.push_str(r#"<div class="table-wrapper"><table class="table">"#);
            return;
        }
        "thead" => "table-header",
        "tbody" => "table-body",
        "tr" => "table-row",
        "th" => "table-head",
        _ => "table-cell",
    };
    write!(out, r#"<{} class="{class}""#, el.tag).unwrap();
    if let Some(align) = el.attrs.get("align") {
        write!(out, r#" style="text-align: {}""#, escape_html(align)).unwrap();
    }
    out.push('>');
}

fn image(el: &Element<'_>, out: &mut String) {
    out.push_str("<img");
    push_attr(out, "src", el.attrs.get("src"));
    push_attr(out, "alt", Some(el.attrs.get("alt").unwrap_or_default()));
    push_attr(out, "title", el.attrs.get("title").filter(|t| !t.is_empty()));
    out.push_str(r#" class="doc-image" loading="lazy">"#);
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

fn link_open(el: &Element<'_>, out: &mut String) {
    let href = el.attrs.get("href").unwrap_or_default();
    out.push_str("<a");
    push_attr(out, "href", Some(href));
    push_attr(out, "title", el.attrs.get("title").filter(|t| !t.is_empty()));
    if is_external(href) {
        out.push_str(r#" target="_blank" rel="noopener noreferrer""#);
    }
    out.push('>');
}

fn code_title(el: &Element<'_>, out: &mut String) {
    let Some(title) = el.attrs.get("title") else {
        return;
    };
    out.push_str(r#"<div class="code-title">"#);
    if let Some(icon) = file_icon(title) {
        write!(out, r#"<i class="devicon-{icon}-plain code-icon"></i>"#).unwrap();
    }
    write!(out, "{}</div>", escape_html(title)).unwrap();
}

/// Code block with optional title bar. `data-raw` carries the source for copy buttons.
fn code_block(el: &Element<'_>, source: &str, out: &mut String) {
    let escaped = escape_html(source);
    out.push_str(r#"<div class="code-block">"#);
    code_title(el, out);
    write!(out, r#"<pre data-raw="{escaped}"><code"#).unwrap();
    if let Some(lang) = el.attrs.get("lang") {
        write!(out, r#" class="language-{}""#, escape_html(lang)).unwrap();
    }
    write!(out, ">{escaped}</code></pre></div>").unwrap();
}
