//! agsend-tmux: tmux IO boundary.
//! Subprocess execution, pane listing, session queries, and literal send.
//! No business logic — pane selection policy lives in agsend-core.

pub mod error;
pub mod executor;
pub mod pane_info;
pub mod send;
pub mod session;

pub use error::TmuxError;
pub use executor::{TmuxCommandRunner, TmuxExecutor};
pub use pane_info::{LIST_PANES_FORMAT, list_panes, parse_list_panes_output};
pub use send::{escape_literal, focus_pane, send_literal};
pub use session::{current_session, inside_tmux};
