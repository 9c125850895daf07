// User configuration loading and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, ScaffoldError};

/// Optional per-user defaults read from `<config dir>/mkproj/config.toml`.
///
/// Every field is optional; command-line flags override whatever is set
/// here. A missing file yields the defaults, a malformed file is an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    /// Default author name, skips the interactive author prompt.
    pub author: Option<String>,
    /// Directory of template files overriding the built-in set.
    pub template_dir: Option<PathBuf>,
    /// Preferred Python version for virtual environments (e.g. "3.11").
    pub python: Option<String>,
}

impl UserConfig {
    /// Load the user configuration, falling back to defaults when no
    /// config file exists.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Platform config file location (`~/.config/mkproj/config.toml` on
    /// Linux).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mkproj").join("config.toml"))
    }

    /// Load and parse a configuration file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScaffoldError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
            .map_err(|e| ScaffoldError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = UserConfig::parse(
            r#"
author = "Raj Dholakia"
template_dir = "/home/raj/templates"
python = "3.11"
"#,
        )
        .unwrap();

        assert_eq!(config.author.as_deref(), Some("Raj Dholakia"));
        assert_eq!(
            config.template_dir,
            Some(PathBuf::from("/home/raj/templates"))
        );
        assert_eq!(config.python.as_deref(), Some("3.11"));
    }

    #[test]
    fn test_parse_empty_config_gives_defaults() {
        let config = UserConfig::parse("").unwrap();
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(UserConfig::parse("autor = \"typo\"").is_err());
    }

    #[test]
    fn test_load_from_missing_file_is_config_error() {
        let result = UserConfig::load_from(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ScaffoldError::Config(_))));
    }
}
