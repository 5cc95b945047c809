use super::validate_catalog;
use crate::error::{EduhubError, Result};
use crate::model::Resource;
use std::fs;
use std::path::Path;

/// Parses and validates a JSON catalog.
pub fn parse_catalog(content: &str) -> Result<Vec<Resource>> {
    let resources: Vec<Resource> =
        serde_json::from_str(content).map_err(EduhubError::Serialization)?;
    validate_catalog(&resources)?;
    Ok(resources)
}

/// Loads a catalog file from disk.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Resource>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(EduhubError::Catalog(format!(
            "catalog file not found: {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path).map_err(EduhubError::Io)?;
    parse_catalog(&content)
}
