//! The two outgoing message shapes.

/// `File: <path>:<line>` for a bare cursor location.
pub fn location_message(path: &str, line: usize) -> String {
    format!("File: {path}:{line}")
}

/// `File: <path>:<start>-<end>` header followed by the selected lines,
/// joined with newlines. Interior whitespace and blank lines are kept
/// exactly as captured; no trimming, no fencing.
pub fn selection_message(path: &str, start: usize, end: usize, lines: &[String]) -> String {
    let mut message = format!("File: {path}:{start}-{end}\n");
    message.push_str(&lines.join("\n"));
    message
}
