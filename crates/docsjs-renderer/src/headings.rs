//! Table of contents extraction without rendering.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::renderer::{heading_level_to_num, parser_options};
use crate::state::{Heading, HeadingState};

/// Collect every heading of `markdown` in document order.
///
/// Text and anchors match what [`MarkdownRenderer`](crate::MarkdownRenderer)
/// produces for the same input: inline code counts as text, image alt text
/// does not.
///
/// ```
/// use docsjs_renderer::extract_headings;
///
/// let headings = extract_headings("# Hola\n\n## Uso con `persist`\n");
/// assert_eq!(headings[1].text, "Uso con persist");
/// assert_eq!(headings[1].href, "#uso-con-persist");
/// ```
#[must_use]
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    let mut state = HeadingState::default();
    let mut image_depth = 0usize;

    for event in Parser::new_ext(markdown, parser_options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                state.start_heading(heading_level_to_num(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                state.complete_heading();
            }
            Event::Start(Tag::Image { .. }) => image_depth += 1,
            Event::End(TagEnd::Image) => image_depth = image_depth.saturating_sub(1),
            Event::Text(text) | Event::Code(text) if state.is_active() && image_depth == 0 => {
                state.push_text(&text);
            }
            _ => {}
        }
    }

    state.take_headings()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_levels_and_order() {
        let headings = extract_headings("# Uno\n\ntexto\n\n## Dos\n\n### Tres\n");

        let summary: Vec<_> = headings
            .iter()
            .map(|h| (h.level, h.text.as_str(), h.href.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![(1, "Uno", "#uno"), (2, "Dos", "#dos"), (3, "Tres", "#tres")]
        );
    }

    #[test]
    fn test_ignores_headings_in_code() {
        let headings = extract_headings("```md\n# No\n```\n\n## Sí\n");

        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].href, "#s");
    }

    #[test]
    fn test_setext_and_emphasis() {
        let headings = extract_headings("Título *bonito*\n===\n");

        assert_eq!(headings[0].level, 1);
        assert_eq!(headings[0].text, "Título bonito");
    }

    #[test]
    fn test_image_alt_is_not_text() {
        let headings = extract_headings("## Logo ![alt](/a.png)\n");

        assert_eq!(headings[0].text, "Logo");
        assert_eq!(headings[0].href, "#logo");
    }

    #[test]
    fn test_no_headings() {
        assert!(extract_headings("solo texto").is_empty());
        assert!(extract_headings("").is_empty());
    }
}
