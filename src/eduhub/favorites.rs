//! Favorite flags set by the user on top of the catalog's own `is_favorite`.
//!
//! The catalog is read-only, so toggling never edits a [`Resource`]. A
//! [`FavoritesRepository`] remembers the user's choice per id and
//! [`effective_favorite`] combines it with the catalog value.

use crate::error::Result;
use crate::model::{Resource, ResourceId};
use std::collections::HashMap;

pub trait FavoritesRepository {
    /// The user's recorded choice for `id`, if any
    fn favorite_state(&self, id: ResourceId) -> Option<bool>;

    /// Record the user's choice for `id`
    fn set_favorite(&mut self, id: ResourceId, favorite: bool) -> Result<()>;
}

/// Session-only favorites. Nothing is written anywhere.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFavorites {
    choices: HashMap<ResourceId, bool>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesRepository for InMemoryFavorites {
    fn favorite_state(&self, id: ResourceId) -> Option<bool> {
        self.choices.get(&id).copied()
    }

    fn set_favorite(&mut self, id: ResourceId, favorite: bool) -> Result<()> {
        self.choices.insert(id, favorite);
        Ok(())
    }
}

pub fn effective_favorite<F: FavoritesRepository + ?Sized>(
    favorites: &F,
    resource: &Resource,
) -> bool {
    favorites
        .favorite_state(resource.id)
        .unwrap_or(resource.is_favorite)
}

/// Copy of `resource` with `is_favorite` reflecting the user's choice.
pub fn with_effective_favorite<F: FavoritesRepository + ?Sized>(
    favorites: &F,
    resource: Resource,
) -> Resource {
    let is_favorite = effective_favorite(favorites, &resource);
    Resource {
        is_favorite,
        ..resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample::sample_catalog;

    #[test]
    fn catalog_value_applies_until_user_chooses() {
        let catalog = sample_catalog().unwrap();
        let mut favorites = InMemoryFavorites::new();
        let physics = &catalog[1];
        assert!(effective_favorite(&favorites, physics));

        favorites.set_favorite(physics.id, false).unwrap();
        assert!(!effective_favorite(&favorites, physics));
        assert!(physics.is_favorite, "catalog record is untouched");
    }

    #[test]
    fn projection_overrides_flag_only() {
        let catalog = sample_catalog().unwrap();
        let mut favorites = InMemoryFavorites::new();
        favorites.set_favorite(1, true).unwrap();

        let projected = with_effective_favorite(&favorites, catalog[0].clone());
        assert!(projected.is_favorite);
        assert_eq!(projected.name, catalog[0].name);
    }
}
