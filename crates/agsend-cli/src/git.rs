//! git-backed repository root lookup.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use agsend_core::RepoRootLookup;

/// Resolves the working-tree root via `git rev-parse --show-toplevel`.
///
/// Every failure mode — git missing, not a repository, permission error —
/// maps to `None`; the path resolver then picks the configured fallback
/// style instead of surfacing an error.
pub struct GitRepoRoot;

impl RepoRootLookup for GitRepoRoot {
    fn repo_root(&self, dir: &Path) -> Option<PathBuf> {
        let output = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["rev-parse", "--show-toplevel"])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            tracing::debug!(dir = %dir.display(), "not inside a git work tree");
            return None;
        }
        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if root.is_empty() { None } else { Some(PathBuf::from(root)) }
    }
}
