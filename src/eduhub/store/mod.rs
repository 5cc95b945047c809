//! # Catalog Layer
//!
//! This module defines where resources come from. The [`CatalogStore`] trait
//! lets the rest of the application stay ignorant of the source.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only store; holds a validated `Vec<Resource>`
//!   - [`InMemoryStore::builtin`](memory::InMemoryStore::builtin) loads the
//!     bundled six-record catalog ([`sample`])
//!   - [`InMemoryStore::open`](memory::InMemoryStore::open) loads a JSON
//!     catalog file ([`json`])
//!
//! ## Catalog Format
//!
//! A catalog file is a JSON array of resources:
//!
//! ```text
//! [
//!   { "id": 1, "name": "...", "type": "pdf", "size": "2.4 MB",
//!     "uploadDate": "2023-05-15", "category": "Mathematics", ... }
//! ]
//! ```
//!
//! The catalog is read once and stays fixed for the life of the store.

use crate::error::{EduhubError, Result};
use crate::model::{Resource, ResourceId};
use std::collections::HashSet;

pub mod json;
pub mod memory;
pub mod sample;

/// Read-only access to a resource catalog.
pub trait CatalogStore {
    /// All resources, in catalog order
    fn list_resources(&self) -> Result<Vec<Resource>>;

    /// Get a resource by ID
    fn get_resource(&self, id: ResourceId) -> Result<Resource> {
        self.list_resources()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(EduhubError::ResourceNotFound(id))
    }
}

/// Checks the catalog invariants: unique ids, ratings within 0.0-5.0.
pub fn validate_catalog(resources: &[Resource]) -> Result<()> {
    let mut seen = HashSet::with_capacity(resources.len());
    for resource in resources {
        if !seen.insert(resource.id) {
            return Err(EduhubError::Catalog(format!(
                "duplicate resource id {}",
                resource.id
            )));
        }
        if !(0.0..=5.0).contains(&resource.rating) {
            return Err(EduhubError::Catalog(format!(
                "rating {} of resource {} is outside 0.0-5.0",
                resource.rating, resource.id
            )));
        }
    }
    Ok(())
}
