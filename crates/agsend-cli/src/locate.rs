//! Pane location: pattern expansion plus the per-invocation locate pass.

use std::path::Path;

use agsend_core::{
    AgsendError, Config, PaneDescriptor, PaneLocator, PatternSet, choose_pane, matching_panes,
};
use agsend_tmux::{TmuxCommandRunner, current_session, inside_tmux, list_panes};

/// Expand the configured patterns with the real binary names behind them.
///
/// Agent CLIs are often installed as version-pinned symlinks (`claude` →
/// `claude-1.2.34`), and tmux then reports the target's name as the pane's
/// running command. One level of indirection is followed. Yielding no
/// extra names is logged so detection gaps stay diagnosable.
pub fn expand_patterns(configured: &[String]) -> PatternSet {
    let mut patterns = PatternSet::new(configured.iter().map(String::as_str));
    let mut discovered = 0usize;
    for pattern in configured {
        if let Some(real) = resolve_real_name(pattern) {
            if patterns.add(&real) {
                tracing::debug!(%pattern, %real, "pattern expanded to symlink target");
                discovered += 1;
            }
        }
    }
    if discovered == 0 {
        tracing::debug!("binary resolution added no extra pattern names");
    }
    patterns
}

/// File name of the symlink target when `pattern` resolves to a symlinked
/// executable on $PATH.
fn resolve_real_name(pattern: &str) -> Option<String> {
    let exe = which::which(pattern).ok()?;
    let target = std::fs::read_link(&exe).ok()?;
    file_name(&target)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// One locate pass against a live tmux server. Assumes the tmux
/// environment check already passed.
fn locate_in_server(
    runner: &impl TmuxCommandRunner,
    config: &Config,
) -> Result<PaneDescriptor, AgsendError> {
    let session = if config.prefer_session {
        match current_session(runner) {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::warn!(%e, "could not resolve current session; skipping session preference");
                None
            }
        }
    } else {
        None
    };

    let panes = list_panes(runner).map_err(|e| AgsendError::NoPanesAvailable(e.to_string()))?;

    let patterns = expand_patterns(&config.ai_patterns);
    let matches = matching_panes(&panes, &patterns);
    let chosen = match choose_pane(&matches, session.as_deref()) {
        Some(pane) => pane.clone(),
        None => return Err(AgsendError::NoAiPaneFound),
    };
    if matches.len() > 1 {
        tracing::info!(
            candidates = matches.len(),
            pane = %chosen.label(),
            "multiple AI panes matched; taking the first in listing order"
        );
    }
    Ok(chosen)
}

/// Dispatcher seam: environment check, then one locate pass.
pub struct TmuxLocator<R> {
    runner: R,
}

impl<R: TmuxCommandRunner> TmuxLocator<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: TmuxCommandRunner> PaneLocator for TmuxLocator<R> {
    fn locate(&self, config: &Config) -> Result<PaneDescriptor, AgsendError> {
        if !inside_tmux() {
            return Err(AgsendError::NotInTmux);
        }
        locate_in_server(&self.runner, config)
    }
}
