//! Pane descriptor, the unit the locator selects and the transmitter targets.

use serde::{Deserialize, Serialize};

/// One tmux pane as reported by `list-panes -a`.
///
/// Constructed fresh on every locate call from a live tmux query and
/// dropped afterwards; descriptors are never cached across invocations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaneDescriptor {
    pub session_name: String,
    pub pane_id: String,
    pub current_cmd: String,
    pub pane_title: String,
}

impl PaneDescriptor {
    /// Short human label, e.g. `work:%3 (claude)`.
    pub fn label(&self) -> String {
        format!("{}:{} ({})", self.session_name, self.pane_id, self.current_cmd)
    }
}
