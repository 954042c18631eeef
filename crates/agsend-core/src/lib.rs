//! agsend-core: pure logic for sending editor context to AI agent panes.
//! Configuration, path resolution, message formatting, selection guard,
//! pane matching, and the dispatch state machine. No subprocess calls —
//! IO enters through trait seams implemented by the CLI crate.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod matcher;
pub mod message;
pub mod pane;
pub mod path;
pub mod selection;

pub use config::{Config, PathStyle, PathStyleFallback};
pub use dispatch::{Clipboard, Outcome, PaneLocator, Transmitter, dispatch};
pub use error::AgsendError;
pub use matcher::{PatternSet, choose_pane, matching_panes};
pub use message::{location_message, selection_message};
pub use pane::PaneDescriptor;
pub use path::{NO_NAME, RepoRootLookup, resolve_display_path};
pub use selection::{Selection, SizeCheck, check_size};
