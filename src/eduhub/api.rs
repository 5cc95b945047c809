//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every eduhub operation, whatever the UI.
//!
//! The facade:
//! - **Owns** the catalog store and the favorites/download collaborators
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not render, print, or keep query state: the caller owns its
//! [`QueryState`] and passes it in.
//!
//! ## Generic Over Collaborators
//!
//! `EduhubApi<S, F, D>` is generic over the store, the favorites repository
//! and the download initiator, so tests and other front ends can swap any of
//! them. The defaults are the in-memory implementations.

use crate::commands;
use crate::download::{DownloadInitiator, DownloadQueue};
use crate::error::Result;
use crate::favorites::{FavoritesRepository, InMemoryFavorites};
use crate::model::{ResourceId, Scope};
use crate::nav::Navigation;
use crate::state::QueryState;
use crate::store::CatalogStore;

pub struct EduhubApi<S, F = InMemoryFavorites, D = DownloadQueue>
where
    S: CatalogStore,
    F: FavoritesRepository,
    D: DownloadInitiator,
{
    store: S,
    favorites: F,
    downloads: D,
    paths: commands::EduhubPaths,
}

impl<S: CatalogStore> EduhubApi<S> {
    pub fn new(store: S, paths: commands::EduhubPaths) -> Self {
        Self::with_collaborators(store, InMemoryFavorites::new(), DownloadQueue::new(), paths)
    }
}

impl<S, F, D> EduhubApi<S, F, D>
where
    S: CatalogStore,
    F: FavoritesRepository,
    D: DownloadInitiator,
{
    pub fn with_collaborators(
        store: S,
        favorites: F,
        downloads: D,
        paths: commands::EduhubPaths,
    ) -> Self {
        Self {
            store,
            favorites,
            downloads,
            paths,
        }
    }

    pub fn list_resources(&self, state: &QueryState) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.favorites, state)
    }

    /// Previews the resource selected in `state`, if any.
    pub fn preview(&self, state: &QueryState) -> Result<Option<commands::CmdResult>> {
        state
            .preview
            .map(|id| self.view_resource(id))
            .transpose()
    }

    pub fn view_resource(&self, id: ResourceId) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, &self.favorites, id)
    }

    pub fn toggle_favorite(&mut self, id: ResourceId) -> Result<commands::CmdResult> {
        commands::favorite::toggle(&self.store, &mut self.favorites, id)
    }

    pub fn download(&mut self, id: ResourceId) -> Result<commands::CmdResult> {
        commands::download::run(&self.store, &mut self.downloads, id)
    }

    pub fn share(&self, id: ResourceId) -> Result<commands::CmdResult> {
        commands::share::run(&self.store, id)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::filters::categories(&self.store)
    }

    pub fn types(&self) -> commands::CmdResult {
        commands::filters::types()
    }

    pub fn navigation(&self) -> Navigation {
        Navigation::site()
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn favorites(&self) -> &F {
        &self.favorites
    }

    pub fn downloads(&self) -> &D {
        &self.downloads
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, EduhubPaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, SortKey};
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api(temp: &TempDir) -> EduhubApi<InMemoryStore> {
        let paths = EduhubPaths {
            project: Some(temp.path().join(".eduhub")),
            global: temp.path().join("global"),
        };
        EduhubApi::new(InMemoryStore::builtin().unwrap(), paths)
    }

    #[test]
    fn list_dispatches_with_state() {
        let temp = TempDir::new().unwrap();
        let state = QueryState::new().apply(Action::SetSort(SortKey::Rating));
        let result = api(&temp).list_resources(&state).unwrap();
        assert_eq!(result.listed_resources[0].id, 3);
        assert_eq!(result.state, Some(state));
    }

    #[test]
    fn preview_follows_state_selection() {
        let temp = TempDir::new().unwrap();
        let api = api(&temp);
        assert!(api.preview(&QueryState::new()).unwrap().is_none());

        let state = QueryState::new().apply(Action::OpenPreview(5));
        let result = api.preview(&state).unwrap().unwrap();
        assert_eq!(result.preview.unwrap().id, 5);
    }

    #[test]
    fn favorite_toggle_is_visible_in_later_listings() {
        let temp = TempDir::new().unwrap();
        let mut api = api(&temp);
        api.toggle_favorite(6).unwrap();
        assert_eq!(api.favorites().favorite_state(6), Some(true));

        let listed = api.list_resources(&QueryState::new()).unwrap();
        assert!(listed
            .listed_resources
            .iter()
            .find(|r| r.id == 6)
            .unwrap()
            .is_favorite);
    }

    #[test]
    fn download_goes_to_the_queue() {
        let temp = TempDir::new().unwrap();
        let mut api = api(&temp);
        api.download(1).unwrap();
        api.download(3).unwrap();
        let ids: Vec<_> = api.downloads().requests().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn init_uses_the_scope_dir() {
        let temp = TempDir::new().unwrap();
        api(&temp).init(Scope::Global).unwrap();
        assert!(temp.path().join("global").join("config.json").exists());
    }
}
