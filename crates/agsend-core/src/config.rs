//! Immutable-after-setup configuration.
//! Built once at startup from defaults merged with TOML overrides, then
//! passed by reference into every component call. No ambient globals.

use serde::{Deserialize, Serialize};

use crate::error::AgsendError;

/// How a file path is rendered in outgoing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStyle {
    RepositoryRelative,
    CwdRelative,
    Absolute,
}

/// Rendering used when repository-relative resolution is impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStyleFallback {
    FilenameOnly,
    CwdRelative,
    Absolute,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Process-name patterns identifying AI agent panes (substring,
    /// case-insensitive, matched against command and title).
    pub ai_patterns: Vec<String>,
    /// Prefer matching panes in the session the command was issued from.
    pub prefer_session: bool,
    /// Copy to the system clipboard when no pane can be reached.
    pub fallback_clipboard: bool,
    pub path_style: PathStyle,
    pub path_style_fallback: PathStyleFallback,
    /// Hard cap on selection size; larger selections are rejected.
    pub max_selection_lines: usize,
    /// Soft threshold; larger selections warn but still go through.
    /// 0 disables the warning.
    pub warn_selection_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_patterns: vec![
                "claude".to_string(),
                "codex".to_string(),
                "gemini".to_string(),
                "aider".to_string(),
            ],
            prefer_session: true,
            fallback_clipboard: true,
            path_style: PathStyle::RepositoryRelative,
            path_style_fallback: PathStyleFallback::FilenameOnly,
            max_selection_lines: 200,
            warn_selection_lines: 50,
        }
    }
}

impl Config {
    /// Parse a TOML override file merged over the defaults, then validate.
    pub fn from_toml(s: &str) -> Result<Self, AgsendError> {
        let config: Config = toml::from_str(s).map_err(|e| AgsendError::InvalidConfig {
            field: "config".to_string(),
            reason: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the rest of the system relies on.
    pub fn validate(&self) -> Result<(), AgsendError> {
        if self.ai_patterns.is_empty() {
            return Err(AgsendError::InvalidConfig {
                field: "ai_patterns".to_string(),
                reason: "at least one pattern is required".to_string(),
            });
        }
        if self.ai_patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(AgsendError::InvalidConfig {
                field: "ai_patterns".to_string(),
                reason: "patterns must be non-empty strings".to_string(),
            });
        }
        if self.max_selection_lines == 0 {
            return Err(AgsendError::InvalidConfig {
                field: "max_selection_lines".to_string(),
                reason: "must be a positive integer".to_string(),
            });
        }
        if self.warn_selection_lines > self.max_selection_lines {
            return Err(AgsendError::InvalidConfig {
                field: "warn_selection_lines".to_string(),
                reason: format!(
                    "must not exceed max_selection_lines ({})",
                    self.max_selection_lines
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().expect("defaults must validate");
        assert!(config.ai_patterns.contains(&"claude".to_string()));
        assert_eq!(config.path_style, PathStyle::RepositoryRelative);
        assert_eq!(config.path_style_fallback, PathStyleFallback::FilenameOnly);
    }

    #[test]
    fn empty_toml_is_defaults() {
        let config = Config::from_toml("").expect("empty file is fine");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_override_merges_over_defaults() {
        let config = Config::from_toml(
            r#"
ai_patterns = ["opencode"]
path_style = "cwd_relative"
"#,
        )
        .expect("should parse");
        assert_eq!(config.ai_patterns, vec!["opencode".to_string()]);
        assert_eq!(config.path_style, PathStyle::CwdRelative);
        // untouched fields keep their defaults
        assert!(config.prefer_session);
        assert_eq!(config.max_selection_lines, 200);
    }

    #[test]
    fn unknown_key_rejected() {
        let result = Config::from_toml("ai_patters = [\"claude\"]\n");
        assert!(matches!(
            result,
            Err(AgsendError::InvalidConfig { field, .. }) if field == "config"
        ));
    }

    #[test]
    fn bad_style_value_rejected() {
        let result = Config::from_toml("path_style = \"repo\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn empty_pattern_list_rejected() {
        let result = Config::from_toml("ai_patterns = []\n");
        assert!(matches!(
            result,
            Err(AgsendError::InvalidConfig { field, .. }) if field == "ai_patterns"
        ));
    }

    #[test]
    fn blank_pattern_rejected() {
        let result = Config::from_toml("ai_patterns = [\"claude\", \"  \"]\n");
        assert!(result.is_err());
    }

    #[test]
    fn zero_max_rejected() {
        let result = Config::from_toml("max_selection_lines = 0\n");
        assert!(matches!(
            result,
            Err(AgsendError::InvalidConfig { field, .. }) if field == "max_selection_lines"
        ));
    }

    #[test]
    fn warn_above_max_rejected() {
        let result = Config::from_toml("max_selection_lines = 10\nwarn_selection_lines = 11\n");
        assert!(matches!(
            result,
            Err(AgsendError::InvalidConfig { field, .. }) if field == "warn_selection_lines"
        ));
    }

    #[test]
    fn warn_equal_to_max_accepted() {
        let config =
            Config::from_toml("max_selection_lines = 10\nwarn_selection_lines = 10\n").unwrap();
        assert_eq!(config.warn_selection_lines, 10);
    }

    #[test]
    fn style_round_trips_through_serde() {
        let config = Config::from_toml("path_style = \"absolute\"\n").unwrap();
        assert_eq!(config.path_style, PathStyle::Absolute);
        let config = Config::from_toml("path_style_fallback = \"cwd_relative\"\n").unwrap();
        assert_eq!(config.path_style_fallback, PathStyleFallback::CwdRelative);
    }
}
