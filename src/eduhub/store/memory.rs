use super::json::load_catalog;
use super::sample::sample_catalog;
use super::{validate_catalog, CatalogStore};
use crate::error::{EduhubError, Result};
use crate::model::{Resource, ResourceId};
use std::path::Path;

/// Catalog held in memory for the life of the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    resources: Vec<Resource>,
}

impl InMemoryStore {
    pub fn from_resources(resources: Vec<Resource>) -> Result<Self> {
        validate_catalog(&resources)?;
        Ok(Self { resources })
    }

    /// The bundled sample catalog.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            resources: sample_catalog()?,
        })
    }

    /// A catalog read from a JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            resources: load_catalog(path)?,
        })
    }
}

impl CatalogStore for InMemoryStore {
    fn list_resources(&self) -> Result<Vec<Resource>> {
        Ok(self.resources.clone())
    }

    fn get_resource(&self, id: ResourceId) -> Result<Resource> {
        self.resources
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(EduhubError::ResourceNotFound(id))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ResourceType;
    use chrono::NaiveDate;

    pub struct CatalogFixture {
        resources: Vec<Resource>,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                resources: Vec::new(),
            }
        }

        fn next_id(&self) -> ResourceId {
            self.resources.iter().map(|r| r.id).max().unwrap_or(0) + 1
        }

        pub fn with_resource(
            mut self,
            name: &str,
            resource_type: ResourceType,
            category: &str,
            uploaded: &str,
        ) -> Self {
            let date = NaiveDate::parse_from_str(uploaded, "%Y-%m-%d").unwrap();
            let mut resource = Resource::new(self.next_id(), name, resource_type, category, date);
            resource.description = format!("About {}", name);
            resource.url = format!("/files/{}", name.to_lowercase().replace(' ', "-"));
            self.resources.push(resource);
            self
        }

        pub fn with_favorite(mut self, name: &str, category: &str) -> Self {
            self = self.with_resource(name, ResourceType::Document, category, "2023-01-01");
            if let Some(last) = self.resources.last_mut() {
                last.is_favorite = true;
            }
            self
        }

        pub fn store(self) -> InMemoryStore {
            InMemoryStore::from_resources(self.resources).unwrap()
        }
    }
}
