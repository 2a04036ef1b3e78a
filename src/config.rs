//! Phone book configuration
//!
//! Settings come from an optional TOML file in the user config directory
//! and can be overridden with environment variables.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PhonebookError, Result};

const ENV_CONTACTS: &str = "PHONEBOOK_CONTACTS";
const ENV_LOG: &str = "PHONEBOOK_LOG";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON or CSV file to load contacts from.
    pub contacts_file: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `debug` or `phonebook=trace`.
    pub log_level: Option<String>,
}

impl Config {
    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse a config file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PhonebookError::Config(e.to_string()))
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("phonebook").join("config.toml"))
    }

    fn apply_env(&mut self) {
        self.apply_env_from(|key| env::var(key).ok());
    }

    /// Apply overrides from `lookup`. Blank values are ignored.
    fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(path) = non_empty(ENV_CONTACTS) {
            self.contacts_file = Some(PathBuf::from(path));
        }
        if let Some(level) = non_empty(ENV_LOG) {
            self.log_level = Some(level);
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// The `--file` flag wins over the configured file.
    pub fn contacts_file<'a>(&'a self, flag: Option<&'a Path>) -> Option<&'a Path> {
        flag.or(self.contacts_file.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
            contacts_file = "/tmp/contacts.csv"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.contacts_file, Some(PathBuf::from("/tmp/contacts.csv")));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            Config::parse("contacts_file = ["),
            Err(PhonebookError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"info\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.contacts_file, None);
    }

    #[test]
    fn test_env_overrides_config_file() {
        let mut config = Config::parse(
            r#"
            contacts_file = "from-config.json"
            log_level = "info"
            "#,
        )
        .unwrap();
        config.apply_env_from(|key| match key {
            ENV_CONTACTS => Some("from-env.csv".to_string()),
            ENV_LOG => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config.contacts_file, Some(PathBuf::from("from-env.csv")));
        assert_eq!(config.log_level(), "debug");

        // The flag still wins over the environment.
        let flag = PathBuf::from("from-flag.csv");
        assert_eq!(config.contacts_file(Some(flag.as_path())), Some(flag.as_path()));
    }

    #[test]
    fn test_blank_env_ignored() {
        let mut config = Config::parse("contacts_file = \"from-config.json\"").unwrap();
        config.apply_env_from(|_| Some("  ".to_string()));
        assert_eq!(config.contacts_file, Some(PathBuf::from("from-config.json")));
        assert_eq!(config.log_level, None);

        config.apply_env_from(|_| None);
        assert_eq!(config.contacts_file, Some(PathBuf::from("from-config.json")));
    }

    #[test]
    fn test_flag_overrides_config_file() {
        let config = Config {
            contacts_file: Some(PathBuf::from("from-config.json")),
            log_level: None,
        };
        let flag = PathBuf::from("from-flag.csv");
        assert_eq!(config.contacts_file(Some(flag.as_path())), Some(flag.as_path()));
        assert_eq!(
            config.contacts_file(None),
            Some(Path::new("from-config.json"))
        );
    }
}
