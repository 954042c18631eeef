//! Literal transmission to a pane.
//!
//! `send-keys -l` passes the payload to the pane uninterpreted, so shell
//! metacharacters, quotes, backticks and `$(...)` arrive as-is. The one
//! character tmux still treats specially in literal mode is the backslash,
//! which is why it is the only thing escaped here.

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// Double every backslash; everything else passes through untouched.
pub fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
}

/// Send `text` to a pane as one literal operation, with a single trailing
/// newline so the receiving prompt lands on a fresh input line.
pub fn send_literal(
    runner: &impl TmuxCommandRunner,
    pane_id: &str,
    text: &str,
) -> Result<(), TmuxError> {
    let mut payload = escape_literal(text);
    payload.push('\n');
    runner.run(&["send-keys", "-t", pane_id, "-l", &payload])?;
    Ok(())
}

/// Move input focus to the pane: select it within its window, then switch
/// the attached client over to it. The client switch can fail when no
/// client is attached (scripted use); that is not worth failing the send
/// for, so it is logged and ignored.
pub fn focus_pane(runner: &impl TmuxCommandRunner, pane_id: &str) -> Result<(), TmuxError> {
    runner.run(&["select-pane", "-t", pane_id])?;
    if let Err(e) = runner.run(&["switch-client", "-t", pane_id]) {
        tracing::debug!(%e, pane_id, "switch-client skipped");
    }
    Ok(())
}
