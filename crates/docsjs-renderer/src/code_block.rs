//! Fence info parsing and file icons for code blocks.
//!
//! Two title notations are accepted on a fence:
//!
//! ````markdown
//! ```js:next.config.js
//! ```ts title="store.ts"
//! ````

use crate::components::Attrs;

/// Language and title parsed from a fence info string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FenceInfo {
    pub(crate) lang: Option<String>,
    pub(crate) title: Option<String>,
}

impl FenceInfo {
    /// Attributes handed to the code block component.
    pub(crate) fn to_attrs(&self) -> Attrs {
        let mut attrs = Attrs::new();
        if let Some(lang) = &self.lang {
            attrs.set("lang", lang.as_str());
        }
        if let Some(title) = &self.title {
            attrs.set("title", title.as_str());
        }
        attrs
    }
}

/// Parse fence info into language and optional title.
pub(crate) fn parse_fence_info(info: &str) -> FenceInfo {
    let info = info.trim();
    let (head, rest) = info
        .split_once(char::is_whitespace)
        .unwrap_or((info, ""));

    let (lang, mut title) = match head.split_once(':') {
        Some((lang, title)) => (lang, non_empty(title)),
        None => (head, None),
    };

    if title.is_none() {
        let attrs = Attrs::parse(rest);
        title = attrs
            .get("title")
            .or_else(|| attrs.get("filename"))
            .and_then(non_empty);
    }

    FenceInfo {
        lang: non_empty(lang),
        title,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

/// Devicon name for a code block title, chosen by file name or extension.
pub(crate) fn file_icon(title: &str) -> Option<&'static str> {
    let name = title.rsplit('/').next().unwrap_or(title).to_lowercase();
    if name == "dockerfile" {
        return Some("docker");
    }
    let (_, ext) = name.rsplit_once('.')?;
    let icon = match ext {
        "js" | "mjs" | "cjs" => "javascript",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" | "jsx" => "react",
        "json" => "json",
        "md" | "mdx" => "markdown",
        "css" => "css3",
        "scss" | "sass" => "sass",
        "html" => "html5",
        "sh" | "bash" | "zsh" => "bash",
        "py" => "python",
        "rs" => "rust",
        "go" => "go",
        "yml" | "yaml" => "yaml",
        "sql" => "postgresql",
        "vue" => "vuejs",
        "svelte" => "svelte",
        "prisma" => "prisma",
        _ => return None,
    };
    Some(icon)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn info(lang: Option<&str>, title: Option<&str>) -> FenceInfo {
        FenceInfo {
            lang: lang.map(str::to_owned),
            title: title.map(str::to_owned),
        }
    }

    #[test]
    fn test_parse_fence_info_language_only() {
        assert_eq!(parse_fence_info("bash"), info(Some("bash"), None));
    }

    #[test]
    fn test_parse_fence_info_colon_title() {
        assert_eq!(
            parse_fence_info("js:next.config.js"),
            info(Some("js"), Some("next.config.js"))
        );
    }

    #[test]
    fn test_parse_fence_info_title_attribute() {
        assert_eq!(
            parse_fence_info(r#"ts title="src/store.ts""#),
            info(Some("ts"), Some("src/store.ts"))
        );
        assert_eq!(
            parse_fence_info("tsx filename='page.tsx'"),
            info(Some("tsx"), Some("page.tsx"))
        );
    }

    #[test]
    fn test_parse_fence_info_colon_wins_over_attribute() {
        assert_eq!(
            parse_fence_info(r#"js:a.js title="b.js""#),
            info(Some("js"), Some("a.js"))
        );
    }

    #[test]
    fn test_parse_fence_info_empty_parts() {
        assert_eq!(parse_fence_info(""), info(None, None));
        assert_eq!(parse_fence_info("js:"), info(Some("js"), None));
        assert_eq!(parse_fence_info(":file.txt"), info(None, Some("file.txt")));
    }

    #[test]
    fn test_file_icon() {
        assert_eq!(file_icon("next.config.js"), Some("javascript"));
        assert_eq!(file_icon("src/app/page.tsx"), Some("react"));
        assert_eq!(file_icon("README.MD"), Some("markdown"));
        assert_eq!(file_icon("Dockerfile"), Some("docker"));
        assert_eq!(file_icon("Makefile"), None);
        assert_eq!(file_icon("notes.txt"), None);
    }

    #[test]
    fn test_fence_info_to_attrs() {
        let attrs = info(Some("ts"), Some("a.ts")).to_attrs();

        assert_eq!(attrs.get("lang"), Some("ts"));
        assert_eq!(attrs.get("title"), Some("a.ts"));
        assert!(FenceInfo::default().to_attrs().is_empty());
    }
}
