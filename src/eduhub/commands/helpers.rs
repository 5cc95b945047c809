use crate::error::Result;
use crate::favorites::{with_effective_favorite, FavoritesRepository};
use crate::model::{Resource, ResourceId};
use crate::store::CatalogStore;

/// A single resource with the user's favorite choice applied.
pub fn resolved_resource<S: CatalogStore, F: FavoritesRepository>(
    store: &S,
    favorites: &F,
    id: ResourceId,
) -> Result<Resource> {
    let resource = store.get_resource(id)?;
    Ok(with_effective_favorite(favorites, resource))
}

pub fn resolved_resources<F: FavoritesRepository>(
    favorites: &F,
    resources: Vec<Resource>,
) -> Vec<Resource> {
    resources
        .into_iter()
        .map(|r| with_effective_favorite(favorites, r))
        .collect()
}
