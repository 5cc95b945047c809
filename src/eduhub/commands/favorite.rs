use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::{effective_favorite, FavoritesRepository};
use crate::model::{Resource, ResourceId};
use crate::store::CatalogStore;
use tracing::info;

/// Flips the effective favorite flag of one resource.
pub fn toggle<S: CatalogStore, F: FavoritesRepository>(
    store: &S,
    favorites: &mut F,
    id: ResourceId,
) -> Result<CmdResult> {
    let resource = store.get_resource(id)?;
    let is_favorite = !effective_favorite(favorites, &resource);
    favorites.set_favorite(id, is_favorite)?;
    info!(id, is_favorite, "toggled favorite");

    let mut result = CmdResult::default();
    let verb = if is_favorite {
        "Added to favorites"
    } else {
        "Removed from favorites"
    };
    result.add_message(CmdMessage::success(format!("{}: {}", verb, resource.name)));
    result.affected_resources.push(Resource {
        is_favorite,
        ..resource
    });
    Ok(result)
}
