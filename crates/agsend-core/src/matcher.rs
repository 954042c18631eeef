//! Pane matching against expanded process-name patterns.

use crate::pane::PaneDescriptor;

/// Lowercased, de-duplicated pattern set.
///
/// Holds the configured AI process names plus any real binary names the
/// locator discovered behind symlinks. Matching is substring-based and
/// case-insensitive on both the pane command and the pane title.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<String>,
}

impl PatternSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for pattern in patterns {
            set.add(pattern);
        }
        set
    }

    /// Add a pattern, lowercased. Returns `true` when it was new;
    /// blanks and duplicates are ignored.
    pub fn add(&mut self, pattern: impl Into<String>) -> bool {
        let lower = pattern.into().trim().to_lowercase();
        if lower.is_empty() || self.patterns.contains(&lower) {
            return false;
        }
        self.patterns.push(lower);
        true
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// True when `text` contains any pattern, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.patterns.iter().any(|p| lower.contains(p))
    }
}

/// Panes whose running command or title contains any pattern,
/// in enumeration order.
pub fn matching_panes<'a>(
    panes: &'a [PaneDescriptor],
    patterns: &PatternSet,
) -> Vec<&'a PaneDescriptor> {
    panes
        .iter()
        .filter(|p| patterns.matches(&p.current_cmd) || patterns.matches(&p.pane_title))
        .collect()
}

/// Pick one pane from the matches: the first belonging to
/// `current_session` when one is known, otherwise the first overall.
/// Ties beyond that are not ranked.
pub fn choose_pane<'a>(
    matches: &[&'a PaneDescriptor],
    current_session: Option<&str>,
) -> Option<&'a PaneDescriptor> {
    if let Some(session) = current_session {
        if let Some(pane) = matches.iter().find(|p| p.session_name == session) {
            return Some(*pane);
        }
    }
    matches.first().copied()
}
