use crate::commands::{CmdMessage, CmdResult, EduhubPaths};
use crate::config::EduhubConfig;
use crate::error::Result;
use crate::model::Scope;
use std::fs;

/// Creates the scope directory and writes a default config unless one exists.
pub fn run(paths: &EduhubPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(&dir)?;

    let mut result = CmdResult::default();
    if EduhubConfig::exists_in(&dir) {
        result.add_message(CmdMessage::info(format!(
            "Already initialized at {}",
            dir.display()
        )));
        return Ok(result);
    }

    EduhubConfig::default().save(&dir)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized eduhub at {}",
        dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_writes_default_config_once() {
        let temp = TempDir::new().unwrap();
        let paths = EduhubPaths {
            project: Some(temp.path().join(".eduhub")),
            global: temp.path().join("global"),
        };

        let first = run(&paths, Scope::Project).unwrap();
        assert!(first.messages[0].content.starts_with("Initialized eduhub at"));
        assert!(EduhubConfig::exists_in(temp.path().join(".eduhub")));

        let second = run(&paths, Scope::Project).unwrap();
        assert!(second.messages[0].content.starts_with("Already initialized"));
    }
}
