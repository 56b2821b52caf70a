//! Line-based expansion of JSX component tags into HTML blocks.
//!
//! Recognizes component tags that occupy a whole line:
//!
//! ```text
//! <Note type="warning">          opening tag
//! </Note>                        closing tag
//! <Outlet path="empezando" />    self-closing tag
//! <TabsTrigger value="npm">npm</TabsTrigger>   single-line element
//! ```
//!
//! Each tag is replaced by the component's HTML surrounded by blank lines, so
//! the markdown parser treats it as an HTML block and keeps parsing the
//! content between tags as markdown. Content lines are dedented by the
//! indentation of the first content line of the innermost open component,
//! which stops indented component bodies from turning into code blocks.
//! Lines inside fenced code are copied verbatim.

use super::fence::FenceTracker;
use super::{Attrs, Component, ComponentRegistry, Element};
use crate::CompileError;

/// A component tag on its own line.
#[derive(Debug, PartialEq, Eq)]
enum TagLine<'a> {
    Open { name: &'a str, attrs: &'a str },
    SelfClosing { name: &'a str, attrs: &'a str },
    Inline { name: &'a str, attrs: &'a str, body: &'a str },
    Close { name: &'a str },
}

impl<'a> TagLine<'a> {
    fn name(&self) -> &'a str {
        match *self {
            Self::Open { name, .. }
            | Self::SelfClosing { name, .. }
            | Self::Inline { name, .. }
            | Self::Close { name } => name,
        }
    }
}

/// An open component awaiting its closing tag.
struct Frame<'a> {
    name: &'a str,
    component: Component,
    line: usize,
    /// Indentation of the first non-blank content line.
    indent: Option<usize>,
}

/// Expand component tags in `markdown` into HTML blocks.
///
/// # Errors
///
/// Returns [`CompileError`] for tags missing from `registry` and for
/// unbalanced opening or closing tags.
pub(crate) fn preprocess(
    markdown: &str,
    registry: &ComponentRegistry,
) -> Result<String, CompileError> {
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 4);
    let mut fence = FenceTracker::default();
    let mut stack: Vec<Frame<'_>> = Vec::new();

    for (index, raw) in markdown.lines().enumerate() {
        let line_no = index + 1;
        let line = dedent(raw, stack.last_mut());

        if fence.update(line) || fence.in_fence() {
            push_line(&mut out, line);
            continue;
        }

        let Some(tag) = parse_tag_line(line) else {
            push_line(&mut out, line);
            continue;
        };

        let name = tag.name();
        let component = registry
            .get(name)
            .ok_or_else(|| CompileError::UnknownComponent {
                name: name.to_owned(),
                line: line_no,
            })?;

        match tag {
            TagLine::Open { attrs, .. } => {
                let attrs = Attrs::parse(attrs);
                html_block(&mut out, |o| component.open(&Element::new(name, &attrs), o));
                stack.push(Frame {
                    name,
                    component,
                    line: line_no,
                    indent: None,
                });
            }
            TagLine::SelfClosing { attrs, .. } => {
                let attrs = Attrs::parse(attrs);
                html_block(&mut out, |o| {
                    component.open(&Element::new(name, &attrs), o);
                    component.close(name, o);
                });
            }
            TagLine::Inline { attrs, body, .. } => {
                let attrs = Attrs::parse(attrs);
                let el = Element::new(name, &attrs);
                if component.has_inline_label(name) {
                    html_block(&mut out, |o| component.render(&el, body.trim(), o));
                } else {
                    html_block(&mut out, |o| component.open(&el, o));
                    push_line(&mut out, body.trim());
                    html_block(&mut out, |o| component.close(name, o));
                }
            }
            TagLine::Close { .. } => match stack.pop() {
                Some(frame) if frame.name == name => {
                    html_block(&mut out, |o| frame.component.close(name, o));
                }
                Some(frame) => {
                    return Err(CompileError::UnclosedTag {
                        name: frame.name.to_owned(),
                        line: frame.line,
                    });
                }
                None => {
                    return Err(CompileError::UnexpectedClose {
                        name: name.to_owned(),
                        line: line_no,
                    });
                }
            },
        }
    }

    if let Some(frame) = stack.pop() {
        return Err(CompileError::UnclosedTag {
            name: frame.name.to_owned(),
            line: frame.line,
        });
    }

    Ok(out)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Write HTML on its own paragraph so it forms an HTML block.
fn html_block(out: &mut String, write: impl FnOnce(&mut String)) {
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push('\n');
    }
    write(out);
    out.push_str("\n\n");
}

fn leading_ws(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Strip the innermost component's content indentation from `line`.
fn dedent<'a>(line: &'a str, frame: Option<&mut Frame<'_>>) -> &'a str {
    let Some(frame) = frame else {
        return line;
    };
    if line.trim().is_empty() {
        return line.trim_start_matches([' ', '\t']);
    }
    let indent = *frame.indent.get_or_insert_with(|| leading_ws(line));
    &line[leading_ws(line).min(indent)..]
}

fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Byte offset of the `>` ending an opening tag, skipping quoted and braced values.
fn tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'' | '`') => quote = Some(c),
            (None, '{') => depth += 1,
            (None, '}') => depth = depth.saturating_sub(1),
            (None, '>') if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Recognize a whole-line component tag.
fn parse_tag_line(line: &str) -> Option<TagLine<'_>> {
    let s = line.trim();

    if let Some(rest) = s.strip_prefix("</") {
        let name = rest.strip_suffix('>')?.trim();
        return is_component_name(name).then_some(TagLine::Close { name });
    }

    let rest = s.strip_prefix('<')?;
    let name_len = rest
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(rest.len());
    let name = &rest[..name_len];
    if !is_component_name(name) {
        return None;
    }

    let after = &rest[name_len..];
    let end = tag_end(after)?;
    let attrs = &after[..end];
    let tail = after[end + 1..].trim();

    if let Some(attrs) = attrs.trim_end().strip_suffix('/') {
        return tail
            .is_empty()
            .then_some(TagLine::SelfClosing { name, attrs });
    }
    if tail.is_empty() {
        return Some(TagLine::Open { name, attrs });
    }

    let body = tail.strip_suffix('>')?.strip_suffix(name)?.strip_suffix("</")?;
    Some(TagLine::Inline { name, attrs, body })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(markdown: &str) -> Result<String, CompileError> {
        preprocess(markdown, &ComponentRegistry::standard())
    }

    #[test]
    fn test_parse_tag_line_kinds() {
        assert_eq!(
            parse_tag_line(r#"<Note type="warning">"#),
            Some(TagLine::Open {
                name: "Note",
                attrs: r#" type="warning""#
            })
        );
        assert_eq!(
            parse_tag_line("  </Note>  "),
            Some(TagLine::Close { name: "Note" })
        );
        assert_eq!(
            parse_tag_line(r#"<Outlet path="a" />"#),
            Some(TagLine::SelfClosing {
                name: "Outlet",
                attrs: r#" path="a" "#
            })
        );
        assert_eq!(
            parse_tag_line(r#"<TabsTrigger value="npm">npm</TabsTrigger>"#),
            Some(TagLine::Inline {
                name: "TabsTrigger",
                attrs: r#" value="npm""#,
                body: "npm"
            })
        );
    }

    #[test]
    fn test_parse_tag_line_ignores_non_components() {
        assert_eq!(parse_tag_line("<div>"), None);
        assert_eq!(parse_tag_line("<!-- comentario -->"), None);
        assert_eq!(parse_tag_line("Texto con <Note> en medio"), None);
        assert_eq!(parse_tag_line("<Note>texto sin cierre"), None);
        assert_eq!(parse_tag_line("a < b"), None);
    }

    #[test]
    fn test_parse_tag_line_gt_inside_attribute() {
        assert_eq!(
            parse_tag_line(r#"<Note title="a > b">"#),
            Some(TagLine::Open {
                name: "Note",
                attrs: r#" title="a > b""#
            })
        );
    }

    #[test]
    fn test_note_becomes_html_block() {
        let out = run("<Note type=\"warning\">\n  Cuidado con **esto**.\n</Note>\n").unwrap();

        assert_eq!(
            out,
            concat!(
                r#"<div class="note note-warning"><p class="note-title">Advertencia</p><div class="note-content">"#,
                "\n\nCuidado con **esto**.\n\n",
                "</div></div>\n\n"
            )
        );
    }

    #[test]
    fn test_nested_components_are_dedented() {
        let markdown = concat!(
            "<Tabs defaultValue=\"npm\">\n",
            "  <TabsContent value=\"npm\">\n",
            "    ```bash\n",
            "    npm i zustand\n",
            "    ```\n",
            "  </TabsContent>\n",
            "</Tabs>\n",
        );
        let out = run(markdown).unwrap();

        assert!(out.contains("\n```bash\nnpm i zustand\n```\n"));
        assert!(out.contains(r#"<div class="tabs-content" role="tabpanel" data-value="npm">"#));
        assert!(out.ends_with("</div>\n\n</div>\n\n"));
    }

    #[test]
    fn test_tabs_trigger_label() {
        let out = run("<TabsTrigger value=\"npm\">npm</TabsTrigger>").unwrap();

        assert_eq!(
            out,
            "<div class=\"tabs-trigger\" role=\"tab\" data-value=\"npm\">npm</div>\n\n"
        );
    }

    #[test]
    fn test_tags_inside_code_fence_are_kept() {
        let markdown = "```mdx\n<Note>\n<Unknown />\n```\n";

        assert_eq!(run(markdown).unwrap(), markdown);
    }

    #[test]
    fn test_plain_markdown_unchanged() {
        let markdown = "# Título\n\nTexto <b>html</b>.\n";

        assert_eq!(run(markdown).unwrap(), markdown);
    }

    #[test]
    fn test_unknown_component() {
        assert_eq!(
            run("Texto\n\n<Chart data={x} />\n"),
            Err(CompileError::UnknownComponent {
                name: "Chart".to_owned(),
                line: 3
            })
        );
    }

    #[test]
    fn test_unclosed_component() {
        assert_eq!(
            run("<Note>\ntexto\n"),
            Err(CompileError::UnclosedTag {
                name: "Note".to_owned(),
                line: 1
            })
        );
    }

    #[test]
    fn test_mismatched_close() {
        assert_eq!(
            run("<Tabs>\n<TabsList>\n</Tabs>\n"),
            Err(CompileError::UnclosedTag {
                name: "TabsList".to_owned(),
                line: 2
            })
        );
    }

    #[test]
    fn test_unexpected_close() {
        assert_eq!(
            run("texto\n</Note>\n"),
            Err(CompileError::UnexpectedClose {
                name: "Note".to_owned(),
                line: 2
            })
        );
    }
}
