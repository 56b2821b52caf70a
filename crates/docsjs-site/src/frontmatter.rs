//! YAML frontmatter of content files.
//!
//! A content file may start with a `---` line, followed by a YAML mapping and
//! a closing `---` line. Everything after the closing line is the body.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Metadata header of a documentation page.
///
/// Keys other than `title` and `description` are kept in `extra` and
/// serialized alongside them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Frontmatter {
    /// Reinterpret this header as a blog post header.
    ///
    /// `authors`, `date` and `cover` are taken from `extra`. If they have the
    /// wrong shape, only `title` and `description` are kept.
    #[must_use]
    pub fn to_blog(&self) -> BlogFrontmatter {
        serde_json::to_value(self)
            .and_then(serde_json::from_value)
            .unwrap_or_else(|e| {
                tracing::warn!(title = %self.title, error = %e, "Malformed blog header");
                BlogFrontmatter {
                    title: self.title.clone(),
                    description: self.description.clone(),
                    ..BlogFrontmatter::default()
                }
            })
    }
}

/// Author of a blog post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub handle: String,
    pub username: String,
    pub handle_url: String,
}

/// Metadata header of a blog post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogFrontmatter {
    pub title: String,
    pub description: String,
    /// Publication date as written (e.g. `2025-03-14`).
    pub date: String,
    pub authors: Vec<Author>,
    pub cover: String,
}

/// Split `raw` into the YAML header (if any) and the body.
///
/// ```
/// use docsjs_site::split_frontmatter;
///
/// let (header, body) = split_frontmatter("---\ntitle: Hola\n---\n# Hola\n");
/// assert_eq!(header, Some("title: Hola\n"));
/// assert_eq!(body, "# Hola\n");
///
/// assert_eq!(split_frontmatter("# Sin cabecera"), (None, "# Sin cabecera"));
/// ```
#[must_use]
pub fn split_frontmatter(raw: &str) -> (Option<&str>, &str) {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let Some(after_open) = strip_delimiter_line(text) else {
        return (None, text);
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let header = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return (Some(header), body);
        }
        offset += line.len();
    }

    // No closing delimiter: not a header
    (None, text)
}

/// Strip an opening `---` line, returning what follows it.
fn strip_delimiter_line(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("---")?;
    let (line, after) = rest.split_once('\n').unwrap_or((rest, ""));
    line.trim().is_empty().then_some(after)
}

/// Parse a YAML header into `T`.
///
/// A missing, empty or malformed header yields `T::default()`; malformed
/// headers are logged with `origin` for context.
pub fn parse_header<T>(header: Option<&str>, origin: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(yaml) = header.filter(|h| !h.trim().is_empty()) else {
        return T::default();
    };
    match serde_yaml::from_str(yaml) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %origin, error = %e, "Malformed frontmatter, using defaults");
            T::default()
        }
    }
}

/// Split `raw` and parse its header in one step.
pub fn parse_frontmatter<'a, T>(raw: &'a str, origin: &str) -> (T, &'a str)
where
    T: DeserializeOwned + Default,
{
    let (header, body) = split_frontmatter(raw);
    (parse_header(header, origin), body)
}
