//! Error taxonomy for the dispatch boundary.
//! Every external-command failure is converted into one of these kinds
//! before it reaches a caller; nothing propagates raw.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgsendError {
    #[error("not inside a tmux session")]
    NotInTmux,

    #[error("could not list tmux panes: {0}")]
    NoPanesAvailable(String),

    #[error("no AI agent pane found")]
    NoAiPaneFound,

    #[error("sending to pane failed: {0}")]
    SendFailed(String),

    #[error("no clipboard command available")]
    ClipboardUnavailable,

    #[error("clipboard copy failed: {0}")]
    ClipboardCopyFailed(String),

    #[error("current buffer has no file associated with it")]
    InvalidBuffer,

    #[error("selection of {lines} lines exceeds the {max}-line limit")]
    SelectionTooLarge { lines: usize, max: usize },

    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl AgsendError {
    /// One-line remedial hint for user-facing failure output, when one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NotInTmux => Some("run from inside tmux, or enable fallback_clipboard"),
            Self::NoAiPaneFound => {
                Some("start an agent (e.g. `claude`) in a tmux pane, or extend ai_patterns")
            }
            Self::ClipboardUnavailable => Some("install pbcopy, wl-copy, xclip or xsel"),
            Self::SelectionTooLarge { .. } => {
                Some("raise max_selection_lines or send a smaller range")
            }
            _ => None,
        }
    }
}
