use crate::dispatcher::Selection;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "practice.toml";

/// Entries run when nothing is requested on the command line.
pub const DEFAULT_RUN: &[&str] = &["5.1", "5.2"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub run: Vec<String>,
    pub headers: bool,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            run: DEFAULT_RUN.iter().map(|id| id.to_string()).collect(),
            headers: true,
            color: true,
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn default_selection(&self) -> Selection {
        Selection::Ids(self.run.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.run, vec!["5.1", "5.2"]);
        assert!(settings.headers);
        assert_eq!(settings.default_selection(), Selection::ids(["5.1", "5.2"]));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml("run = [\"4.20\"]\n").unwrap();
        assert_eq!(settings.run, vec!["4.20"]);
        assert!(settings.headers);
        assert!(settings.color);

        let settings = Settings::from_toml("headers = false\ncolor = false").unwrap();
        assert_eq!(settings.run, vec!["5.1", "5.2"]);
        assert!(!settings.headers);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        assert!(matches!(
            Settings::from_toml("run = 3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_toml("colour = true"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "run = []\nheaders = false").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert!(settings.run.is_empty());
        assert!(settings.default_selection().is_empty());
        assert!(!settings.headers);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(Settings::load(&path), Err(ConfigError::Read { .. })));
        assert_eq!(Settings::load_or_default(&path).unwrap(), Settings::default());
    }
}
