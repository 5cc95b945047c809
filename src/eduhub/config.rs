//! # Configuration
//!
//! Stored as `config.json` in the scope directory (`.eduhub/` for the
//! project scope, the OS data directory for the global scope). A missing file
//! means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default-sort` | `recent` | Sort key a session starts with |
//! | `default-view` | `grid` | View mode a session starts with |
//! | `catalog` | (bundled) | Path to a JSON catalog file |

use crate::error::{EduhubError, Result};
use crate::state::{Action, QueryState, SortKey, ViewMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 3] = ["default-sort", "default-view", "catalog"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EduhubConfig {
    #[serde(default)]
    pub default_sort: SortKey,

    #[serde(default)]
    pub default_view: ViewMode,

    /// Relative paths resolve against the directory holding `config.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl EduhubConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(EduhubError::Io)?;
        let config: EduhubConfig =
            serde_json::from_str(&content).map_err(EduhubError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir).map_err(EduhubError::Io)?;

        let content = serde_json::to_string_pretty(self).map_err(EduhubError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(EduhubError::Io)?;
        Ok(())
    }

    pub fn exists_in<P: AsRef<Path>>(config_dir: P) -> bool {
        config_dir.as_ref().join(CONFIG_FILENAME).exists()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-sort" => Some(self.default_sort.to_string()),
            "default-view" => Some(self.default_view.to_string()),
            "catalog" => Some(
                self.catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(bundled)".to_string()),
            ),
            _ => None,
        }
    }

    /// Sets a key from its textual value. Unlike `--sort`, a stored sort key
    /// must be one of the known keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-sort" => {
                self.default_sort = value
                    .parse()
                    .map_err(|_| EduhubError::Config(format!("invalid sort key: {}", value)))?;
            }
            "default-view" => {
                self.default_view = value
                    .parse()
                    .map_err(|_| EduhubError::Config(format!("invalid view mode: {}", value)))?;
            }
            "catalog" => {
                let value = value.trim();
                self.catalog = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => {
                return Err(EduhubError::Config(format!(
                    "unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }

    /// The state a session starts in.
    pub fn initial_state(&self) -> QueryState {
        QueryState::new()
            .apply(Action::SetSort(self.default_sort))
            .apply(Action::SetView(self.default_view))
    }

    /// Catalog path with relative paths resolved against `config_dir`.
    pub fn catalog_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.catalog.as_ref().map(|p| {
            if p.is_relative() {
                config_dir.join(p)
            } else {
                p.clone()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EduhubConfig::default();
        assert_eq!(config.default_sort, SortKey::Recent);
        assert_eq!(config.default_view, ViewMode::Grid);
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = EduhubConfig::load(temp.path()).unwrap();
        assert_eq!(config, EduhubConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".eduhub");

        let mut config = EduhubConfig::default();
        config.set("default-sort", "rating").unwrap();
        config.set("default-view", "list").unwrap();
        config.save(&dir).unwrap();
        assert!(EduhubConfig::exists_in(&dir));

        let loaded = EduhubConfig::load(&dir).unwrap();
        assert_eq!(loaded.default_sort, SortKey::Rating);
        assert_eq!(loaded.default_view, ViewMode::List);
    }

    #[test]
    fn test_set_rejects_unknown_values() {
        let mut config = EduhubConfig::default();
        assert!(matches!(
            config.set("default-sort", "downloads"),
            Err(EduhubError::Config(_))
        ));
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, EduhubConfig::default());
    }

    #[test]
    fn test_catalog_path_resolution() {
        let mut config = EduhubConfig::default();
        let dir = Path::new("/tmp/eduhub-config");
        assert_eq!(config.catalog_path(dir), None);

        config.set("catalog", "library.json").unwrap();
        assert_eq!(
            config.catalog_path(dir),
            Some(PathBuf::from("/tmp/eduhub-config/library.json"))
        );

        config.set("catalog", "").unwrap();
        assert_eq!(config.get("catalog").unwrap(), "(bundled)");
    }

    #[test]
    fn test_initial_state_uses_defaults() {
        let mut config = EduhubConfig::default();
        config.set("default-sort", "name").unwrap();
        let state = config.initial_state();
        assert_eq!(state.sort, SortKey::Name);
        assert_eq!(state.view, ViewMode::Grid);
        assert!(!state.has_filters());
    }

    #[test]
    fn test_list_all_in_key_order() {
        let keys: Vec<_> = EduhubConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, KEYS.to_vec());
    }
}
