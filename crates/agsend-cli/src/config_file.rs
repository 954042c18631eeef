//! Config file discovery and loading.

use std::path::PathBuf;

use agsend_core::Config;

/// Default location: `$XDG_CONFIG_HOME/agsend/config.toml`, falling back
/// to `~/.config/agsend/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir).join("agsend").join("config.toml"));
        }
    }
    std::env::var("HOME")
        .ok()
        .filter(|h| !h.is_empty())
        .map(|h| PathBuf::from(h).join(".config").join("agsend").join("config.toml"))
}

/// Load the configuration. An explicitly named file must exist and parse;
/// the default path is optional and a missing file means the defaults.
/// A malformed or invalid file is a hard startup error either way.
pub fn load(explicit: Option<&str>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config {path}: {e}"))?;
        return Ok(Config::from_toml(&content)?);
    }

    let Some(path) = default_config_path() else {
        return Ok(Config::default());
    };
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(Config::from_toml(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(anyhow::anyhow!(
            "failed to read config {}: {e}",
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_file_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(file, "ai_patterns = [\"opencode\"]").expect("write");

        let config = load(Some(path.to_str().expect("utf8 path"))).expect("load");
        assert_eq!(config.ai_patterns, vec!["opencode".to_string()]);
        assert!(config.prefer_session, "unset fields keep defaults");
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.toml");
        assert!(load(Some(path.to_str().expect("utf8 path"))).is_err());
    }

    #[test]
    fn explicit_invalid_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_selection_lines = 0\n").expect("write");
        assert!(load(Some(path.to_str().expect("utf8 path"))).is_err());
    }
}
