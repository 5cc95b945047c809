use crate::api::{EduhubApi, EduhubPaths};
use crate::config::EduhubConfig;
use crate::error::{EduhubError, Result};
use crate::model::Scope;
use crate::state::QueryState;
use crate::store::memory::InMemoryStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PROJECT_DIR_NAME: &str = ".eduhub";
pub const GLOBAL_DATA_ENV: &str = "EDUHUB_GLOBAL_DATA";

pub struct EduhubContext {
    pub api: EduhubApi<InMemoryStore>,
    pub scope: Scope,
    /// Where the session starts, per config
    pub initial_state: QueryState,
}

/// The global data directory: `EDUHUB_GLOBAL_DATA` when set (mainly for
/// tests), the OS data directory otherwise.
pub fn global_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(GLOBAL_DATA_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "eduhub", "eduhub")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| EduhubError::Config("Could not determine data directory".to_string()))
}

/// Builds the API for a session started in `cwd`.
///
/// The catalog comes from `catalog_override` when given, then from the
/// config's `catalog` key, then from the bundled sample.
pub fn initialize(
    cwd: &Path,
    use_global: bool,
    catalog_override: Option<PathBuf>,
) -> Result<EduhubContext> {
    let project_dir = cwd.join(PROJECT_DIR_NAME);
    let global_dir = global_data_dir()?;

    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config_dir = match scope {
        Scope::Project => &project_dir,
        Scope::Global => &global_dir,
    };
    let config = EduhubConfig::load(config_dir)?;

    let catalog_path = catalog_override.or_else(|| config.catalog_path(config_dir));
    let store = match &catalog_path {
        Some(path) => {
            debug!(path = %path.display(), "loading catalog file");
            InMemoryStore::open(path)?
        }
        None => InMemoryStore::builtin()?,
    };

    let paths = EduhubPaths {
        project: Some(project_dir),
        global: global_dir,
    };
    let initial_state = config.initial_state();

    Ok(EduhubContext {
        api: EduhubApi::new(store, paths),
        scope,
        initial_state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ViewMode;
    use std::fs;
    use tempfile::TempDir;

    const ONE_RESOURCE: &str = r#"[{"id": 9, "name": "Star Charts", "type": "image",
        "size": "3 MB", "uploadDate": "2023-09-09", "category": "Astronomy"}]"#;

    #[test]
    fn defaults_to_bundled_catalog() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path(), false, None).unwrap();
        assert_eq!(ctx.scope, Scope::Project);
        assert_eq!(ctx.initial_state, QueryState::new());
        let result = ctx.api.list_resources(&ctx.initial_state).unwrap();
        assert_eq!(result.catalog_size, 6);
    }

    #[test]
    fn project_config_selects_catalog_and_view() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(PROJECT_DIR_NAME);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("astro.json"), ONE_RESOURCE).unwrap();

        let mut config = EduhubConfig::default();
        config.set("catalog", "astro.json").unwrap();
        config.set("default-view", "list").unwrap();
        config.save(&dir).unwrap();

        let ctx = initialize(temp.path(), false, None).unwrap();
        assert_eq!(ctx.initial_state.view, ViewMode::List);
        let result = ctx.api.categories().unwrap();
        assert_eq!(result.categories, vec!["Astronomy"]);
    }

    #[test]
    fn override_wins_over_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("other.json");
        fs::write(&path, ONE_RESOURCE).unwrap();

        let ctx = initialize(temp.path(), false, Some(path)).unwrap();
        let result = ctx.api.view_resource(9).unwrap();
        assert_eq!(result.preview.unwrap().name, "Star Charts");
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");
        assert!(initialize(temp.path(), false, Some(missing)).is_err());
    }
}
