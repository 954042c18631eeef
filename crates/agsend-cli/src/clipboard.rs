//! System clipboard adapter: detect a writer command once, pipe text to it.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

use agsend_core::{AgsendError, Clipboard};

/// Clipboard writers in detection priority order, one per platform
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCmd {
    /// macOS
    Pbcopy,
    /// Wayland
    WlCopy,
    /// X11
    Xclip,
    /// X11, when xclip is absent
    Xsel,
    /// Windows
    Clip,
}

impl ClipboardCmd {
    const ALL: [Self; 5] = [
        Self::Pbcopy,
        Self::WlCopy,
        Self::Xclip,
        Self::Xsel,
        Self::Clip,
    ];

    pub fn program(self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::WlCopy => "wl-copy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::Clip => "clip",
        }
    }

    fn args(self) -> &'static [&'static str] {
        match self {
            Self::Xclip => &["-selection", "clipboard"],
            Self::Xsel => &["--clipboard", "--input"],
            _ => &[],
        }
    }
}

/// Memoized detection result. The available command cannot change
/// mid-session, and re-scanning $PATH on every fallback is waste;
/// recomputing would be idempotent, so no lock is needed beyond the cell.
static DETECTED: OnceLock<Option<ClipboardCmd>> = OnceLock::new();

/// First clipboard command present on $PATH, if any.
pub fn detect() -> Option<ClipboardCmd> {
    *DETECTED.get_or_init(|| {
        ClipboardCmd::ALL
            .into_iter()
            .find(|cmd| which::which(cmd.program()).is_ok())
    })
}

/// Pipe `text` to the command's stdin.
pub fn copy(cmd: ClipboardCmd, text: &str) -> Result<(), AgsendError> {
    let spawn_and_wait = || -> std::io::Result<Output> {
        let mut child = Command::new(cmd.program())
            .args(cmd.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        child.wait_with_output()
    };

    let output = spawn_and_wait().map_err(|e| AgsendError::ClipboardCopyFailed(e.to_string()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AgsendError::ClipboardCopyFailed(format!(
            "{} exited {}: {}",
            cmd.program(),
            output.status.code().unwrap_or(-1),
            stderr.trim()
        )));
    }
    Ok(())
}

/// Dispatcher seam over the detected command.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), AgsendError> {
        match detect() {
            Some(cmd) => copy(cmd, text),
            None => Err(AgsendError::ClipboardUnavailable),
        }
    }
}
