//! JSX attribute parsing.
//!
//! Parses the attribute part of a component tag such as
//! `<Note type="warning" title='Cuidado' open>` or `<Tabs defaultValue={"npm"}>`.

/// Ordered attribute list of a component tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs {
    items: Vec<(String, String)>,
}

impl Attrs {
    /// Create an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse JSX-style attributes.
    ///
    /// Supports `key="value"`, `key='value'`, `key={expr}` and bare `key`
    /// (read as `"true"`). For `{expr}` a single string literal inside the
    /// braces is unquoted; any other expression is kept verbatim.
    ///
    /// ```
    /// use docsjs_renderer::Attrs;
    ///
    /// let attrs = Attrs::parse(r#"type="warning" title='Ojo' defaultValue={"npm"} open"#);
    /// assert_eq!(attrs.get("type"), Some("warning"));
    /// assert_eq!(attrs.get("title"), Some("Ojo"));
    /// assert_eq!(attrs.get("defaultValue"), Some("npm"));
    /// assert_eq!(attrs.get("open"), Some("true"));
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut attrs = Self::new();
        let mut remaining = s.trim();

        while !remaining.is_empty() {
            let key_end = remaining
                .find(|c: char| c.is_whitespace() || c == '=')
                .unwrap_or(remaining.len());
            let key = &remaining[..key_end];
            let rest = remaining[key_end..].trim_start();

            if key.is_empty() {
                // Stray `=` or similar; skip one character
                let skip = remaining.chars().next().map_or(1, char::len_utf8);
                remaining = remaining[skip..].trim_start();
                continue;
            }

            if let Some(after_eq) = rest.strip_prefix('=') {
                let (value, rest) = parse_value(after_eq.trim_start());
                attrs.set(key, value);
                remaining = rest.trim_start();
            } else {
                attrs.set(key, "true");
                remaining = rest;
            }
        }

        attrs
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.items.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.items.push((key, value));
        }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parse one attribute value and return it with the unparsed remainder.
fn parse_value(s: &str) -> (String, &str) {
    if let Some(quote) = s.chars().next().filter(|c| *c == '"' || *c == '\'') {
        let body = &s[1..];
        return match body.find(quote) {
            Some(end) => (body[..end].to_owned(), &body[end + 1..]),
            None => (body.to_owned(), ""),
        };
    }

    if let Some(body) = s.strip_prefix('{') {
        let mut depth = 1usize;
        for (i, c) in body.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return (unquote_expression(&body[..i]), &body[i + 1..]);
                    }
                }
                _ => {}
            }
        }
        return (unquote_expression(body), "");
    }

    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    (s[..end].to_owned(), &s[end..])
}

/// Strip quotes from a JSX expression that is a single string literal.
fn unquote_expression(expr: &str) -> String {
    let expr = expr.trim();
    for quote in ['"', '\'', '`'] {
        if let Some(inner) = expr
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
            .filter(|inner| !inner.contains(quote))
        {
            return inner.to_owned();
        }
    }
    expr.to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty() {
        assert!(Attrs::parse("").is_empty());
        assert!(Attrs::parse("   ").is_empty());
    }

    #[test]
    fn test_double_quoted_with_spaces() {
        let attrs = Attrs::parse(r#"title="Paso uno: instalar""#);
        assert_eq!(attrs.get("title"), Some("Paso uno: instalar"));
    }

    #[test]
    fn test_single_quoted() {
        let attrs = Attrs::parse("value='yarn'");
        assert_eq!(attrs.get("value"), Some("yarn"));
    }

    #[test]
    fn test_expression_values() {
        let attrs = Attrs::parse(r#"a={"npm"} b={3} c={{ x: 1 }} d={`tpl`}"#);
        assert_eq!(attrs.get("a"), Some("npm"));
        assert_eq!(attrs.get("b"), Some("3"));
        assert_eq!(attrs.get("c"), Some("{ x: 1 }"));
        assert_eq!(attrs.get("d"), Some("tpl"));
    }

    #[test]
    fn test_bare_and_unquoted() {
        let attrs = Attrs::parse("open level=2");
        assert_eq!(attrs.get("open"), Some("true"));
        assert_eq!(attrs.get("level"), Some("2"));
    }

    #[test]
    fn test_spaces_around_equals() {
        let attrs = Attrs::parse(r#"type = "danger""#);
        assert_eq!(attrs.get("type"), Some("danger"));
    }

    #[test]
    fn test_unterminated_quote_takes_rest() {
        let attrs = Attrs::parse(r#"title="sin cierre"#);
        assert_eq!(attrs.get("title"), Some("sin cierre"));
    }

    #[test]
    fn test_set_replaces() {
        let attrs = Attrs::new().with("a", "1").with("a", "2");
        assert_eq!(attrs.get("a"), Some("2"));
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(Attrs::parse("a=1").get("b"), None);
    }
}
