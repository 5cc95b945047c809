//! # Resource Query Pipeline
//!
//! Turns a catalog and a [`QueryState`] into the ordered list to display.
//!
//! 1. **Filter**: keep a resource when the search text is a case-insensitive
//!    substring of its name or description, its category equals the selected
//!    one (or "all") and its type equals the selected one (or "all").
//! 2. **Sort**: order the survivors by the selected [`SortKey`]. The sort is
//!    stable, so resources with equal keys keep their catalog order.
//!
//! The catalog is borrowed and never modified; the same input always gives the
//! same output.

use crate::model::Resource;
use crate::state::{QueryState, SortKey};
use feruca::Collator;
use std::cmp::Ordering;

pub fn query(catalog: &[Resource], state: &QueryState) -> Vec<Resource> {
    let mut results = filter_resources(catalog, state);
    sort_resources(&mut results, state.sort);
    results
}

/// The filter stage alone, in catalog order.
pub fn filter_resources(catalog: &[Resource], state: &QueryState) -> Vec<Resource> {
    let needle = state.search.to_lowercase();
    catalog
        .iter()
        .filter(|resource| matches_search(resource, &needle))
        .filter(|resource| state.category.matches(&resource.category))
        .filter(|resource| state.resource_type.matches(resource.resource_type))
        .cloned()
        .collect()
}

pub fn matches(resource: &Resource, state: &QueryState) -> bool {
    matches_search(resource, &state.search.to_lowercase())
        && state.category.matches(&resource.category)
        && state.resource_type.matches(resource.resource_type)
}

// `needle` must already be lowercased
fn matches_search(resource: &Resource, needle: &str) -> bool {
    needle.is_empty()
        || resource.name.to_lowercase().contains(needle)
        || resource.description.to_lowercase().contains(needle)
}

pub fn sort_resources(resources: &mut [Resource], key: SortKey) {
    // slice::sort_by is stable
    match key {
        SortKey::Recent => resources.sort_by(|a, b| b.upload_date.cmp(&a.upload_date)),
        SortKey::Popular => resources.sort_by(|a, b| b.downloads.cmp(&a.downloads)),
        // Ratings are validated to 0..=5, never NaN
        SortKey::Rating => resources.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
        // Unicode root collation: accented letters sort with their base letter
        SortKey::Name => {
            let mut collator = Collator::default();
            resources.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
        }
    }
}

/// Distinct categories in order of first appearance.
pub fn categories(catalog: &[Resource]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for resource in catalog {
        if !seen.iter().any(|c| c == &resource.category) {
            seen.push(resource.category.clone());
        }
    }
    seen
}
