use crate::commands::CmdResult;
use crate::error::Result;
use crate::favorites::FavoritesRepository;
use crate::query::query;
use crate::state::QueryState;
use crate::store::CatalogStore;

use super::helpers::resolved_resources;

pub fn run<S: CatalogStore, F: FavoritesRepository>(
    store: &S,
    favorites: &F,
    state: &QueryState,
) -> Result<CmdResult> {
    let catalog = store.list_resources()?;
    let listed = resolved_resources(favorites, query(&catalog, state));

    Ok(CmdResult::default()
        .with_listed_resources(listed, catalog.len())
        .with_state(state.clone()))
}
