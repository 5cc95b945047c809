//! # Query State
//!
//! The user-controlled view over the catalog: search text, category and type
//! filters, sort key, view mode and the resource being previewed.
//!
//! A [`QueryState`] is never edited in place. Every user gesture is an
//! [`Action`], and [`reduce`] returns the next state:
//!
//! ```rust
//! use eduhub::state::{reduce, Action, QueryState, SortKey};
//!
//! let state = QueryState::default();
//! let state = reduce(&state, Action::SetSearch("physics".into()));
//! let state = reduce(&state, Action::SetSort(SortKey::Rating));
//! assert_eq!(state.search, "physics");
//! ```

use crate::error::EduhubError;
use crate::model::{ResourceId, ResourceType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Selection value meaning "no filter" for category and type.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Recent,
    Popular,
    Rating,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Recent,
        SortKey::Popular,
        SortKey::Rating,
        SortKey::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Popular => "popular",
            SortKey::Rating => "rating",
            SortKey::Name => "name",
        }
    }

    /// Lenient parse used for user selections: only the exact lowercase keys
    /// are recognized, anything else sorts as [`SortKey::Recent`].
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            debug!(key, "unknown sort key, using recent");
            SortKey::Recent
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = EduhubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| EduhubError::InvalidValue(format!("Unknown sort key: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = EduhubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(EduhubError::InvalidValue(format!(
                "Unknown view mode: {} (expected grid or list)",
                s
            ))),
        }
    }
}

/// Category selection. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_selection(selection: &str) -> Self {
        if selection == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(selection.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ResourceType),
}

impl TypeFilter {
    pub fn matches(&self, resource_type: ResourceType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == resource_type,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str(ALL),
            TypeFilter::Only(t) => write!(f, "{}", t),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = EduhubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(TypeFilter::All)
        } else {
            Ok(TypeFilter::Only(s.parse()?))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryState {
    pub search: String,
    pub category: CategoryFilter,
    pub resource_type: TypeFilter,
    pub sort: SortKey,
    pub view: ViewMode,
    pub preview: Option<ResourceId>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `reduce(&self, action)` when chaining.
    pub fn apply(&self, action: Action) -> Self {
        reduce(self, action)
    }

    /// True when search, category or type narrow the catalog.
    pub fn has_filters(&self) -> bool {
        !self.search.is_empty()
            || self.category != CategoryFilter::All
            || self.resource_type != TypeFilter::All
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetSearch(String),
    SetCategory(CategoryFilter),
    SetType(TypeFilter),
    SetSort(SortKey),
    SetView(ViewMode),
    OpenPreview(ResourceId),
    ClosePreview,
    /// Resets search, category and type. Sort, view and preview are kept.
    ClearFilters,
}

pub fn reduce(state: &QueryState, action: Action) -> QueryState {
    match action {
        Action::SetSearch(search) => QueryState {
            search,
            ..state.clone()
        },
        Action::SetCategory(category) => QueryState {
            category,
            ..state.clone()
        },
        Action::SetType(resource_type) => QueryState {
            resource_type,
            ..state.clone()
        },
        Action::SetSort(sort) => QueryState {
            sort,
            ..state.clone()
        },
        Action::SetView(view) => QueryState {
            view,
            ..state.clone()
        },
        Action::OpenPreview(id) => QueryState {
            preview: Some(id),
            ..state.clone()
        },
        Action::ClosePreview => QueryState {
            preview: None,
            ..state.clone()
        },
        Action::ClearFilters => QueryState {
            search: String::new(),
            category: CategoryFilter::All,
            resource_type: TypeFilter::All,
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_session() {
        let state = QueryState::new();
        assert_eq!(state.search, "");
        assert_eq!(state.category, CategoryFilter::All);
        assert_eq!(state.resource_type, TypeFilter::All);
        assert_eq!(state.sort, SortKey::Recent);
        assert_eq!(state.view, ViewMode::Grid);
        assert_eq!(state.preview, None);
        assert!(!state.has_filters());
    }

    #[test]
    fn reduce_leaves_the_input_state_untouched() {
        let before = QueryState::new();
        let after = reduce(&before, Action::SetSearch("calculus".into()));
        assert_eq!(before.search, "");
        assert_eq!(after.search, "calculus");
    }

    #[test]
    fn clear_filters_keeps_sort_view_and_preview() {
        let state = QueryState::new()
            .apply(Action::SetSearch("cell".into()))
            .apply(Action::SetCategory(CategoryFilter::Only("Biology".into())))
            .apply(Action::SetType(TypeFilter::Only(ResourceType::Presentation)))
            .apply(Action::SetSort(SortKey::Name))
            .apply(Action::SetView(ViewMode::List))
            .apply(Action::OpenPreview(6));
        assert!(state.has_filters());

        let cleared = state.apply(Action::ClearFilters);
        assert!(!cleared.has_filters());
        assert_eq!(cleared.sort, SortKey::Name);
        assert_eq!(cleared.view, ViewMode::List);
        assert_eq!(cleared.preview, Some(6));
    }

    #[test]
    fn preview_opens_and_closes() {
        let state = QueryState::new().apply(Action::OpenPreview(3));
        assert_eq!(state.preview, Some(3));
        assert_eq!(state.apply(Action::ClosePreview).preview, None);
    }

    #[test]
    fn unknown_sort_key_falls_back_to_recent() {
        assert_eq!(SortKey::from_key("popular"), SortKey::Popular);
        assert_eq!(SortKey::from_key("downloads"), SortKey::Recent);
        assert_eq!(SortKey::from_key(""), SortKey::Recent);
    }

    #[test]
    fn sort_keys_match_exactly() {
        assert_eq!(SortKey::from_key("rating"), SortKey::Rating);
        assert_eq!(SortKey::from_key("Rating"), SortKey::Recent);
        assert_eq!(SortKey::from_key(" name "), SortKey::Recent);
        assert!(matches!(
            "NAME".parse::<SortKey>(),
            Err(EduhubError::InvalidValue(_))
        ));
    }

    #[test]
    fn category_selection_all_means_no_filter() {
        assert_eq!(CategoryFilter::from_selection("all"), CategoryFilter::All);
        let physics = CategoryFilter::from_selection("Physics");
        assert!(physics.matches("Physics"));
        assert!(!physics.matches("physics"));
    }

    #[test]
    fn type_filter_parses_all_and_types() {
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            "video".parse::<TypeFilter>().unwrap(),
            TypeFilter::Only(ResourceType::Video)
        );
        assert!("movie".parse::<TypeFilter>().is_err());
    }

    #[test]
    fn view_mode_parses_case_insensitively() {
        assert_eq!("LIST".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert!(matches!(
            "table".parse::<ViewMode>(),
            Err(EduhubError::InvalidValue(_))
        ));
    }
}
