//! Option lists for the category and type selectors.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ResourceType;
use crate::query::categories as derive_categories;
use crate::store::CatalogStore;

pub fn categories<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let catalog = store.list_resources()?;
    Ok(CmdResult::default().with_categories(derive_categories(&catalog)))
}

pub fn types() -> CmdResult {
    CmdResult::default().with_types(ResourceType::ALL.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn categories_follow_the_catalog() {
        let store = CatalogFixture::new()
            .with_resource("Optics", ResourceType::Pdf, "Physics", "2023-01-01")
            .with_resource("Waves", ResourceType::Audio, "Physics", "2023-01-02")
            .with_resource("Poems", ResourceType::Document, "Literature", "2023-01-03")
            .store();
        let result = categories(&store).unwrap();
        assert_eq!(result.categories, vec!["Physics", "Literature"]);
    }

    #[test]
    fn types_are_the_closed_set() {
        let result = types();
        assert_eq!(result.types.len(), 7);
        assert_eq!(result.types[0], ResourceType::Pdf);
    }
}
