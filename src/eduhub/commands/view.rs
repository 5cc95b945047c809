use crate::commands::CmdResult;
use crate::error::Result;
use crate::favorites::FavoritesRepository;
use crate::model::ResourceId;
use crate::store::CatalogStore;

use super::helpers::resolved_resource;

pub fn run<S: CatalogStore, F: FavoritesRepository>(
    store: &S,
    favorites: &F,
    id: ResourceId,
) -> Result<CmdResult> {
    let resource = resolved_resource(store, favorites, id)?;
    Ok(CmdResult::default().with_preview(resource))
}
