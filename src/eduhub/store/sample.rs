//! The catalog bundled with the binary, used when no catalog file is configured.

use super::json::parse_catalog;
use crate::error::Result;
use crate::model::Resource;

const SAMPLE_CATALOG: &str = include_str!("catalog.json");

pub fn sample_catalog() -> Result<Vec<Resource>> {
    parse_catalog(SAMPLE_CATALOG)
}
