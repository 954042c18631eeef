//! Pane listing: format string and parser for `tmux list-panes -a -F`.

use agsend_core::PaneDescriptor;

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// Tab-delimited listing format. Tab is chosen over `:` because pane
/// titles routinely contain colons; tmux never emits literal tabs in the
/// other fields.
pub const LIST_PANES_FORMAT: &str =
    "#{session_name}\t#{pane_id}\t#{pane_current_command}\t#{pane_title}";

/// Number of tab-separated fields produced by `LIST_PANES_FORMAT`.
const EXPECTED_FIELDS: usize = 4;

/// Enumerate all panes across all sessions.
pub fn list_panes(runner: &impl TmuxCommandRunner) -> Result<Vec<PaneDescriptor>, TmuxError> {
    let output = runner.run(&["list-panes", "-a", "-F", LIST_PANES_FORMAT])?;
    Ok(parse_list_panes_output(&output))
}

/// Parse raw listing output, one pane per line.
///
/// Malformed lines are skipped with a warning so a single odd record does
/// not hide the rest of the server's panes.
pub fn parse_list_panes_output(output: &str) -> Vec<PaneDescriptor> {
    let mut panes = Vec::new();
    for line in output.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        match parse_pane_line(line) {
            Some(pane) => panes.push(pane),
            None => {
                tracing::warn!(line, "skipping malformed list-panes line");
            }
        }
    }
    panes
}

fn parse_pane_line(line: &str) -> Option<PaneDescriptor> {
    // splitn keeps any tab inside the final field (the title) intact.
    let parts: Vec<&str> = line.splitn(EXPECTED_FIELDS, '\t').collect();
    if parts.len() < EXPECTED_FIELDS {
        return None;
    }
    Some(PaneDescriptor {
        session_name: parts[0].to_string(),
        pane_id: parts[1].to_string(),
        current_cmd: parts[2].to_string(),
        pane_title: parts[3].to_string(),
    })
}
