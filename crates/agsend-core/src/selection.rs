//! Selection capture and the pre-send size guard.

use crate::config::Config;
use crate::error::AgsendError;

/// An inclusive, 1-indexed line range with its captured text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
    pub lines: Vec<String>,
}

impl Selection {
    /// Build a selection, swapping the marks when they arrive reversed
    /// (visual selections made bottom-up report end before start).
    pub fn new(start: usize, end: usize, lines: Vec<String>) -> Self {
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        Self { start, end, lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Verdict of the size guard when the selection is allowed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCheck {
    Ok,
    /// Over the warn threshold; callers notify and proceed.
    Warn { lines: usize, warn: usize },
}

/// Pure pre-condition check, run before any formatting or IO.
/// Exceeding `max_selection_lines` aborts; exceeding the warn threshold
/// merely flags the selection.
pub fn check_size(selection: &Selection, config: &Config) -> Result<SizeCheck, AgsendError> {
    let lines = selection.line_count();
    if lines > config.max_selection_lines {
        return Err(AgsendError::SelectionTooLarge {
            lines,
            max: config.max_selection_lines,
        });
    }
    if config.warn_selection_lines > 0 && lines > config.warn_selection_lines {
        return Ok(SizeCheck::Warn {
            lines,
            warn: config.warn_selection_lines,
        });
    }
    Ok(SizeCheck::Ok)
}
