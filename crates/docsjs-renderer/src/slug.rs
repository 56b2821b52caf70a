//! Heading anchor slugs.

/// Convert heading text to an anchor slug.
///
/// Lowercases, turns every whitespace run into a single `-`, then drops any
/// character outside `[a-z0-9-]`. Non-ASCII letters are dropped, not
/// transliterated. Identical texts give identical slugs; no deduplication.
///
/// ```
/// use docsjs_renderer::slugify;
///
/// assert_eq!(slugify("Hola Mundo!"), "hola-mundo");
/// assert_eq!(slugify("Guías  rápidas"), "guas-rpidas");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }
    slug
}

/// In-page link target for a heading: `#` followed by its slug.
#[must_use]
pub fn anchor_href(text: &str) -> String {
    format!("#{}", slugify(text))
}
