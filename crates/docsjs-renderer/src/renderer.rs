//! Generic markdown renderer with pluggable backend and component overrides.

use std::fmt::Write;
use std::marker::PhantomData;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::backend::RenderBackend;
use crate::code_block::parse_fence_info;
use crate::components::{Attrs, ComponentRegistry, Element};
use crate::state::{CodeBlockState, Heading, HeadingState, ImageState, TableState, escape_html};

/// Result of rendering markdown.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Headings in document order.
    pub headings: Vec<Heading>,
}

/// Parser options shared by rendering and heading extraction.
///
/// Tables, strikethrough and task lists are enabled.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Convert heading level enum to number (1-6).
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Generic markdown renderer with pluggable backend.
///
/// Constructs with an entry in the [`ComponentRegistry`] (`table` and its
/// parts, `img`, `a`, `pre`) are rendered by that component; everything else
/// goes through the [`RenderBackend`].
pub struct MarkdownRenderer<'r, B: RenderBackend> {
    output: String,
    code: CodeBlockState,
    table: TableState,
    image: ImageState,
    heading: HeadingState,
    components: &'r ComponentRegistry,
    pending_image: Option<(String, String)>,
    /// One entry per open link: whether it was opened by a component.
    link_stack: Vec<bool>,
    _backend: PhantomData<B>,
}

impl<'r, B: RenderBackend> MarkdownRenderer<'r, B> {
    /// Create a renderer using `components` for overridable constructs.
    #[must_use]
    pub fn new(components: &'r ComponentRegistry) -> Self {
        Self {
            output: String::with_capacity(4096),
            code: CodeBlockState::default(),
            table: TableState::default(),
            image: ImageState::default(),
            heading: HeadingState::default(),
            components,
            pending_image: None,
            link_stack: Vec::new(),
            _backend: PhantomData,
        }
    }

    /// Render markdown text with the shared parser options.
    pub fn render_markdown(&mut self, markdown: &str) -> RenderResult {
        self.render(Parser::new_ext(markdown, parser_options()))
    }

    /// Render markdown events and return the result.
    pub fn render<'a, I>(&mut self, events: I) -> RenderResult
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }

        RenderResult {
            html: std::mem::take(&mut self.output),
            headings: self.heading.take_headings(),
        }
    }

    /// Push content to output or heading buffer based on context.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    /// Open a table part through its component, or as a bare tag.
    fn open_table_part(&mut self, tag: &str, align: Option<&str>) {
        if let Some(component) = self.components.get(tag) {
            let mut attrs = Attrs::new();
            if let Some(align) = align {
                attrs.set("align", align);
            }
            component.open(&Element::new(tag, &attrs), &mut self.output);
        } else if let Some(align) = align {
            write!(self.output, r#"<{tag} style="text-align: {align}">"#).unwrap();
        } else {
            write!(self.output, "<{tag}>").unwrap();
        }
    }

    fn close_table_part(&mut self, tag: &str) {
        if let Some(component) = self.components.get(tag) {
            component.close(tag, &mut self.output);
        } else {
            write!(self.output, "</{tag}>").unwrap();
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) => self.output.push_str(&html),
            Event::InlineHtml(html) => self.push_inline(&html),
            Event::SoftBreak => self.push_inline("\n"),
            Event::HardBreak => B::hard_break(&mut self.output),
            Event::Rule => B::horizontal_rule(&mut self.output),
            Event::TaskListMarker(checked) => B::task_list_marker(checked, &mut self.output),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, .. } => {
                // Opening tag is written in end_tag once the id is known.
                self.heading.start_heading(heading_level_to_num(level));
            }
            Tag::BlockQuote(_) => B::blockquote_start(&mut self.output),
            Tag::CodeBlock(kind) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) if !info.trim().is_empty() => {
                        Some(info.to_string())
                    }
                    _ => None,
                };
                self.code.start(info);
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList => self.output.push_str("<dl>"),
            Tag::DefinitionListTitle => self.output.push_str("<dt>"),
            Tag::DefinitionListDefinition => self.output.push_str("<dd>"),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.open_table_part("table", None);
            }
            Tag::TableHead => {
                self.table.start_head();
                self.open_table_part("thead", None);
                self.open_table_part("tr", None);
            }
            Tag::TableRow => {
                self.table.start_row();
                self.open_table_part("tr", None);
            }
            Tag::TableCell => {
                let tag = if self.table.is_in_head() { "th" } else { "td" };
                self.open_table_part(tag, self.table.current_alignment());
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<s>"),
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
            Tag::Link {
                dest_url, title, ..
            } => {
                let mut link = String::new();
                let by_component = if let Some(component) = self.components.get("a") {
                    let attrs = Attrs::new()
                        .with("href", &*dest_url)
                        .with("title", &*title);
                    component.open(&Element::new("a", &attrs), &mut link);
                    true
                } else {
                    B::link_start(&escape_html(&dest_url), &mut link);
                    false
                };
                self.link_stack.push(by_component);
                self.push_inline(&link);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                // Alt text is collected until the end tag.
                self.image.start();
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(_) => {
                if let Some((level, id, html)) = self.heading.complete_heading() {
                    B::heading(level, &id, &html, &mut self.output);
                }
            }
            TagEnd::BlockQuote(_) => B::blockquote_end(&mut self.output),
            TagEnd::CodeBlock => {
                let (info, content) = self.code.end();
                let info = info.as_deref().map(parse_fence_info).unwrap_or_default();
                if let Some(component) = self.components.get("pre") {
                    let attrs = info.to_attrs();
                    component.render(&Element::new("pre", &attrs), &content, &mut self.output);
                } else {
                    B::code_block(info.lang.as_deref(), &content, &mut self.output);
                }
            }
            TagEnd::List(ordered) => {
                self.output
                    .push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::FootnoteDefinition | TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::DefinitionList => self.output.push_str("</dl>"),
            TagEnd::DefinitionListTitle => self.output.push_str("</dt>"),
            TagEnd::DefinitionListDefinition => self.output.push_str("</dd>"),
            TagEnd::Image => {
                let alt = self.image.end();
                let Some((src, title)) = self.pending_image.take() else {
                    return;
                };
                let mut html = String::new();
                if let Some(component) = self.components.get("img") {
                    let attrs = Attrs::new()
                        .with("src", src)
                        .with("alt", alt)
                        .with("title", title);
                    component.open(&Element::new("img", &attrs), &mut html);
                } else {
                    B::image(&src, &alt, &title, &mut html);
                }
                self.push_inline(&html);
            }
            TagEnd::Table => {
                self.close_table_part("tbody");
                self.close_table_part("table");
            }
            TagEnd::TableHead => {
                self.close_table_part("tr");
                self.close_table_part("thead");
                self.open_table_part("tbody", None);
                self.table.end_head();
            }
            TagEnd::TableRow => self.close_table_part("tr"),
            TagEnd::TableCell => {
                let tag = if self.table.is_in_head() { "th" } else { "td" };
                self.close_table_part(tag);
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
            TagEnd::Link => {
                let mut close = String::new();
                if self.link_stack.pop().unwrap_or(false) {
                    if let Some(component) = self.components.get("a") {
                        component.close("a", &mut close);
                    }
                } else {
                    B::link_end(&mut close);
                }
                self.push_inline(&close);
            }
        }
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if self.image.is_active() {
            self.image.push_str(text);
        } else if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.image.is_active() {
            self.image.push_str(code);
        } else if self.heading.is_active() {
            self.heading.push_text(code);
            write!(
                self.heading.html_buffer(),
                "<code>{}</code>",
                escape_html(code)
            )
            .unwrap();
        } else {
            write!(self.output, "<code>{}</code>", escape_html(code)).unwrap();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::HtmlBackend;

    fn render_plain(markdown: &str) -> RenderResult {
        let registry = ComponentRegistry::empty();
        MarkdownRenderer::<HtmlBackend>::new(&registry).render_markdown(markdown)
    }

    fn render_standard(markdown: &str) -> RenderResult {
        let registry = ComponentRegistry::standard();
        MarkdownRenderer::<HtmlBackend>::new(&registry).render_markdown(markdown)
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render_plain("Hola, mundo!").html, "<p>Hola, mundo!</p>");
    }

    #[test]
    fn test_heading_with_anchor() {
        let result = render_plain("## Instalación rápida");

        assert_eq!(
            result.html,
            r##"<h2 id="instalacin-rpida"><a aria-hidden="true" tabindex="-1" href="#instalacin-rpida"><span class="icon icon-link"></span></a>Instalación rápida</h2>"##
        );
        assert_eq!(
            result.headings,
            vec![Heading {
                level: 2,
                text: "Instalación rápida".to_owned(),
                href: "#instalacin-rpida".to_owned(),
            }]
        );
    }

    #[test]
    fn test_heading_with_inline_code_and_link() {
        let result = render_plain("### Usar `create` con [Zustand](https://x.dev)");

        assert!(result.html.contains("<code>create</code>"));
        assert!(result.html.contains(r#"<a href="https://x.dev">Zustand</a>"#));
        assert_eq!(result.headings[0].text, "Usar create con Zustand");
        assert_eq!(result.headings[0].href, "#usar-create-con-zustand");
    }

    #[test]
    fn test_duplicate_headings_share_id() {
        let result = render_plain("## FAQ\n\n## FAQ");

        assert_eq!(result.headings.len(), 2);
        assert_eq!(result.headings[0].href, "#faq");
        assert_eq!(result.headings[1].href, "#faq");
    }

    #[test]
    fn test_plain_code_block() {
        let result = render_plain("```js:app.js\nconst a = 1;\n```");

        assert_eq!(
            result.html,
            "<pre><code class=\"language-js\">const a = 1;\n</code></pre>"
        );
    }

    #[test]
    fn test_component_code_block_with_title() {
        let result = render_standard("```ts title=\"store.ts\"\nexport {}\n```");

        assert!(result.html.starts_with(r#"<div class="code-block"><div class="code-title">"#));
        assert!(result.html.contains("devicon-typescript-plain"));
        assert!(result.html.contains(r#"<code class="language-ts">export {}"#));
    }

    #[test]
    fn test_plain_table() {
        let result = render_plain("| A | B |\n|:--|--:|\n| 1 | 2 |");

        assert_eq!(
            result.html,
            concat!(
                r#"<table><thead><tr><th style="text-align: left">A</th>"#,
                r#"<th style="text-align: right">B</th></tr></thead><tbody><tr>"#,
                r#"<td style="text-align: left">1</td><td style="text-align: right">2</td>"#,
                "</tr></tbody></table>"
            )
        );
    }

    #[test]
    fn test_component_table() {
        let result = render_standard("| A |\n|---|\n| 1 |");

        assert_eq!(
            result.html,
            concat!(
                r#"<div class="table-wrapper"><table class="table">"#,
                r#"<thead class="table-header"><tr class="table-row"><th class="table-head">A</th></tr></thead>"#,
                r#"<tbody class="table-body"><tr class="table-row"><td class="table-cell">1</td></tr></tbody>"#,
                "</table></div>"
            )
        );
    }

    #[test]
    fn test_plain_image() {
        let result = render_plain("![Logo de Zustand](/img/zustand.png)");
        assert_eq!(
            result.html,
            r#"<p><img src="/img/zustand.png" alt="Logo de Zustand"></p>"#
        );
    }

    #[test]
    fn test_component_image() {
        let result = render_standard("![Logo](/logo.png \"Título\")");
        assert_eq!(
            result.html,
            r#"<p><img src="/logo.png" alt="Logo" title="Título" class="doc-image" loading="lazy"></p>"#
        );
    }

    #[test]
    fn test_component_links() {
        let result = render_standard("[docs](/docs) y [npm](https://npmjs.com)");
        assert_eq!(
            result.html,
            r#"<p><a href="/docs">docs</a> y <a href="https://npmjs.com" target="_blank" rel="noopener noreferrer">npm</a></p>"#
        );
    }

    #[test]
    fn test_emphasis_and_strikethrough() {
        let result = render_plain("*a* **b** ~~c~~");
        assert_eq!(result.html, "<p><em>a</em> <strong>b</strong> <s>c</s></p>");
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            render_plain("- uno\n- dos").html,
            "<ul><li>uno</li><li>dos</li></ul>"
        );
        assert_eq!(render_plain("3. tres").html, r#"<ol start="3"><li>tres</li></ol>"#);
    }

    #[test]
    fn test_task_list() {
        let result = render_plain("- [ ] pendiente\n- [x] hecho");
        assert!(result.html.contains(r#"<input type="checkbox" disabled>"#));
        assert!(result.html.contains(r#"<input type="checkbox" checked disabled>"#));
    }

    #[test]
    fn test_html_block_passthrough() {
        let result = render_plain("<div class=\"x\">\n\n*hola*\n\n</div>");
        assert!(result.html.starts_with("<div class=\"x\">\n<p><em>hola</em></p>"));
        assert!(result.html.trim_end().ends_with("</div>"));
    }
}
