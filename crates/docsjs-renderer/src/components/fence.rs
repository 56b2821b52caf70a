//! Code fence tracking for line-based preprocessing.
//!
//! Component tags inside fenced code blocks are example source, not
//! components, so the preprocessor must know when it is inside a fence.

/// Tracks code fence state during line-by-line processing.
///
/// A closing fence must use the opening character and be at least as long.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Fence character and length of the open fence.
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Update fence state for a line. Returns `true` for fence marker lines.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let Some((ch, len, rest)) = fence_run(line.trim_start()) else {
            return false;
        };
        match self.open {
            Some((open_ch, open_len)) => {
                let closes = ch == open_ch && len >= open_len && rest.trim().is_empty();
                if closes {
                    self.open = None;
                }
                closes
            }
            None => {
                self.open = Some((ch, len));
                true
            }
        }
    }
}

/// Leading run of three or more backticks or tildes: (char, length, remainder).
fn fence_run(trimmed: &str) -> Option<(char, usize, &str)> {
    let first = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|&c| c == first).count();
    (len >= 3).then(|| (first, len, &trimmed[len..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtick_fence() {
        let mut tracker = FenceTracker::default();

        assert!(tracker.update("```tsx"));
        assert!(tracker.in_fence());
        assert!(!tracker.update("<Note>"));
        assert!(tracker.in_fence());
        assert!(tracker.update("```"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_closing_needs_same_char_and_length() {
        let mut tracker = FenceTracker::default();

        assert!(tracker.update("````"));
        assert!(!tracker.update("```"));
        assert!(!tracker.update("~~~~"));
        assert!(tracker.in_fence());
        assert!(tracker.update("`````"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_closing_fence_rejects_info_string() {
        let mut tracker = FenceTracker::default();

        tracker.update("```js");
        assert!(!tracker.update("```js"));
        assert!(tracker.in_fence());
    }

    #[test]
    fn test_indented_fence() {
        let mut tracker = FenceTracker::default();

        assert!(tracker.update("    ~~~bash"));
        assert!(tracker.update("  ~~~  "));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_short_run_is_not_a_fence() {
        let mut tracker = FenceTracker::default();

        assert!(!tracker.update("``inline``"));
        assert!(!tracker.in_fence());
    }
}
