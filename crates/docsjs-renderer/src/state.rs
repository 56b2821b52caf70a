//! Shared state structs for markdown rendering.
//!
//! These structs track context during event processing. [`HeadingState`] is
//! shared by the full renderer and the heading extraction pass so both derive
//! the same text and anchor for every heading.

use pulldown_cmark::Alignment;

use crate::slug::slugify;

/// State for tracking code block rendering.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    /// Raw fence info string (e.g., `js:next.config.js`).
    info: Option<String>,
    buffer: String,
}

impl CodeBlockState {
    /// Start a new code block with optional fence info.
    pub(crate) fn start(&mut self, info: Option<String>) {
        self.active = true;
        self.info = info;
        self.buffer.clear();
    }

    /// End the current code block and return (info, content).
    pub(crate) fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.info.take(), std::mem::take(&mut self.buffer))
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// State for tracking table rendering.
#[derive(Default)]
pub(crate) struct TableState {
    in_head: bool,
    alignments: Vec<Alignment>,
    cell_index: usize,
}

impl TableState {
    /// Start a new table with column alignments.
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// CSS `text-align` value for the current cell, if any.
    pub(crate) fn current_alignment(&self) -> Option<&'static str> {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => Some("left"),
            Some(Alignment::Center) => Some("center"),
            Some(Alignment::Right) => Some("right"),
            Some(Alignment::None) | None => None,
        }
    }
}

/// State for tracking image alt text capture.
#[derive(Default)]
pub(crate) struct ImageState {
    active: bool,
    alt_text: String,
}

impl ImageState {
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.alt_text.clear();
    }

    /// End image capture and return the alt text.
    pub(crate) fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt_text)
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.alt_text.push_str(text);
    }
}

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Heading level (1-6).
    pub level: u8,
    /// Plain heading text.
    pub text: String,
    /// In-page link: `#` followed by the anchor id.
    pub href: String,
}

impl Heading {
    /// Anchor id the rendered heading carries.
    #[must_use]
    pub fn id(&self) -> &str {
        self.href.trim_start_matches('#')
    }
}

/// State for tracking headings and building the table of contents.
#[derive(Default)]
pub(crate) struct HeadingState {
    /// Current heading level being processed (None if not in a heading).
    current_level: Option<u8>,
    /// Buffer for heading plain text (for table of contents and slug).
    text: String,
    /// Buffer for heading HTML (with inline formatting).
    html: String,
    headings: Vec<Heading>,
}

impl HeadingState {
    /// Check if we're currently inside a heading.
    pub(crate) fn is_active(&self) -> bool {
        self.current_level.is_some()
    }

    pub(crate) fn start_heading(&mut self, level: u8) {
        self.current_level = Some(level);
        self.text.clear();
        self.html.clear();
    }

    /// Complete the heading and record its table of contents entry.
    ///
    /// Returns (level, id, html) or None if not in a heading.
    pub(crate) fn complete_heading(&mut self) -> Option<(u8, String, String)> {
        let level = self.current_level.take()?;
        let text = std::mem::take(&mut self.text).trim().to_owned();
        let html = std::mem::take(&mut self.html);
        let id = slugify(&text);

        self.headings.push(Heading {
            level,
            href: format!("#{id}"),
            text,
        });

        Some((level, id, html))
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    pub(crate) fn html_buffer(&mut self) -> &mut String {
        &mut self.html
    }

    pub(crate) fn take_headings(&mut self) -> Vec<Heading> {
        std::mem::take(&mut self.headings)
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_code_block_state() {
        let mut state = CodeBlockState::default();
        assert!(!state.is_active());

        state.start(Some("js:app.js".to_owned()));
        assert!(state.is_active());

        state.push_str("const a = 1;");
        let (info, content) = state.end();
        assert_eq!(info.as_deref(), Some("js:app.js"));
        assert_eq!(content, "const a = 1;");
        assert!(!state.is_active());
    }

    #[test]
    fn test_table_state_alignment() {
        let mut state = TableState::default();
        state.start(vec![Alignment::Left, Alignment::None, Alignment::Right]);

        state.start_head();
        assert!(state.is_in_head());
        assert_eq!(state.current_alignment(), Some("left"));

        state.next_cell();
        assert_eq!(state.current_alignment(), None);

        state.next_cell();
        assert_eq!(state.current_alignment(), Some("right"));

        state.end_head();
        assert!(!state.is_in_head());
    }

    #[test]
    fn test_image_state() {
        let mut state = ImageState::default();
        state.start();
        assert!(state.is_active());

        state.push_str("alt text");
        assert_eq!(state.end(), "alt text");
        assert!(!state.is_active());
    }

    #[test]
    fn test_heading_state_records_entry() {
        let mut state = HeadingState::default();

        state.start_heading(2);
        state.push_text(" Hola Mundo! ");
        state.push_html("Hola <em>Mundo</em>!");
        let (level, id, html) = state.complete_heading().unwrap();

        assert_eq!(level, 2);
        assert_eq!(id, "hola-mundo");
        assert_eq!(html, "Hola <em>Mundo</em>!");
        assert_eq!(
            state.take_headings(),
            vec![Heading {
                level: 2,
                text: "Hola Mundo!".to_owned(),
                href: "#hola-mundo".to_owned(),
            }]
        );
    }

    #[test]
    fn test_heading_state_duplicates_share_id() {
        let mut state = HeadingState::default();
        for _ in 0..2 {
            state.start_heading(3);
            state.push_text("Ejemplo");
            state.complete_heading();
        }

        let headings = state.take_headings();

        assert_eq!(headings[0].href, headings[1].href);
        assert_eq!(headings[1].id(), "ejemplo");
    }

    #[test]
    fn test_complete_without_heading() {
        assert!(HeadingState::default().complete_heading().is_none());
    }
}
