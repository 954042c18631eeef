//! Session environment checks and queries.

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;

/// True when the process runs inside a tmux client ($TMUX set and non-empty).
pub fn inside_tmux() -> bool {
    std::env::var("TMUX").map(|v| !v.is_empty()).unwrap_or(false)
}

/// Name of the session the calling client is attached to.
pub fn current_session(runner: &impl TmuxCommandRunner) -> Result<String, TmuxError> {
    let output = runner.run(&["display-message", "-p", "#{session_name}"])?;
    let name = output.trim();
    if name.is_empty() {
        return Err(TmuxError::CommandFailed(
            "display-message returned no session name".to_string(),
        ));
    }
    Ok(name.to_string())
}
