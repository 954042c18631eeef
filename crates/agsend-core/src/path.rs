//! Display-path resolution for outgoing messages.

use std::path::{Path, PathBuf};

use crate::config::{PathStyle, PathStyleFallback};

/// Sentinel used for buffers with no file behind them.
pub const NO_NAME: &str = "[No Name]";

/// Version-control root lookup. Trait-shaped so tests inject a mock; the
/// production implementation shells out to git.
pub trait RepoRootLookup {
    /// Root of the working tree containing `dir`, or `None` when `dir` is
    /// not inside one or the lookup fails for any reason.
    fn repo_root(&self, dir: &Path) -> Option<PathBuf>;
}

impl<T: RepoRootLookup + ?Sized> RepoRootLookup for &T {
    fn repo_root(&self, dir: &Path) -> Option<PathBuf> {
        (**self).repo_root(dir)
    }
}

/// Render `file` according to `style`, degrading to `fallback` when
/// repository-relative resolution is impossible. Resolution failures never
/// surface to the caller; they pick the fallback silently.
///
/// Separators are normalized to `/` regardless of host OS. An empty `file`
/// returns [`NO_NAME`] without touching the filesystem.
pub fn resolve_display_path(
    file: &str,
    cwd: &Path,
    style: PathStyle,
    fallback: PathStyleFallback,
    repo_root: &impl RepoRootLookup,
) -> String {
    if file.is_empty() {
        return NO_NAME.to_string();
    }
    let normalized = normalize_separators(file);
    match style {
        PathStyle::Absolute => normalized,
        PathStyle::CwdRelative => relative_to(&normalized, cwd),
        PathStyle::RepositoryRelative => {
            let dir = Path::new(file)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(cwd);
            match repo_root.repo_root(dir) {
                Some(root) => {
                    let root = normalize_separators(&root.to_string_lossy());
                    strip_base(&normalized, &root)
                        .unwrap_or_else(|| apply_fallback(&normalized, cwd, fallback))
                }
                None => apply_fallback(&normalized, cwd, fallback),
            }
        }
    }
}

fn apply_fallback(normalized: &str, cwd: &Path, fallback: PathStyleFallback) -> String {
    match fallback {
        PathStyleFallback::FilenameOnly => file_name(normalized),
        PathStyleFallback::CwdRelative => relative_to(normalized, cwd),
        PathStyleFallback::Absolute => normalized.to_string(),
    }
}

fn normalize_separators(p: &str) -> String {
    p.replace('\\', "/")
}

/// Path relative to `base`, or the path unchanged when it lies outside.
fn relative_to(normalized: &str, base: &Path) -> String {
    let base = normalize_separators(&base.to_string_lossy());
    strip_base(normalized, &base).unwrap_or_else(|| normalized.to_string())
}

/// Strip `base` (plus the joining slash) off the front of `path`.
/// `None` when `path` is not strictly inside `base`.
fn strip_base(path: &str, base: &str) -> Option<String> {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return None;
    }
    let rest = path.strip_prefix(base)?.strip_prefix('/')?;
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

fn file_name(normalized: &str) -> String {
    normalized
        .rsplit('/')
        .next()
        .unwrap_or(normalized)
        .to_string()
}
