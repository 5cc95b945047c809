use crate::error::EduhubError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type ResourceId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// The closed set of file kinds a resource can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Pdf,
    Image,
    Video,
    Audio,
    Document,
    Presentation,
    Archive,
}

impl ResourceType {
    pub const ALL: [ResourceType; 7] = [
        ResourceType::Pdf,
        ResourceType::Image,
        ResourceType::Video,
        ResourceType::Audio,
        ResourceType::Document,
        ResourceType::Presentation,
        ResourceType::Archive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Pdf => "pdf",
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Audio => "audio",
            ResourceType::Document => "document",
            ResourceType::Presentation => "presentation",
            ResourceType::Archive => "archive",
        }
    }

    /// Human label used in filter option lists.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::Pdf => "PDF",
            ResourceType::Image => "Image",
            ResourceType::Video => "Video",
            ResourceType::Audio => "Audio",
            ResourceType::Document => "Document",
            ResourceType::Presentation => "Presentation",
            ResourceType::Archive => "Archive",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = EduhubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| EduhubError::InvalidValue(format!("Unknown resource type: {}", s)))
    }
}

/// One catalog entry. Field names on the wire follow the catalog JSON format
/// (`uploadDate`, `isFavorite`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    // Pre-formatted for display ("2.4 MB"), never parsed
    pub size: String,
    pub upload_date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_trending: bool,
}

impl Resource {
    pub fn new(
        id: ResourceId,
        name: impl Into<String>,
        resource_type: ResourceType,
        category: impl Into<String>,
        upload_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            resource_type,
            size: String::new(),
            upload_date,
            category: category.into(),
            description: String::new(),
            url: String::new(),
            thumbnail: String::new(),
            downloads: 0,
            rating: 0.0,
            is_favorite: false,
            is_new: false,
            is_trending: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_parses_lowercase_names() {
        assert_eq!("pdf".parse::<ResourceType>().unwrap(), ResourceType::Pdf);
        assert_eq!(
            "presentation".parse::<ResourceType>().unwrap(),
            ResourceType::Presentation
        );
        assert!("PDF".parse::<ResourceType>().is_err());
        assert!(matches!(
            "spreadsheet".parse::<ResourceType>(),
            Err(EduhubError::InvalidValue(_))
        ));
    }

    #[test]
    fn resource_reads_catalog_field_names() {
        let json = r#"{
            "id": 7,
            "name": "Acoustics",
            "type": "audio",
            "size": "12 MB",
            "uploadDate": "2023-08-01",
            "category": "Physics",
            "downloads": 10,
            "rating": 4.2,
            "isFavorite": true
        }"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.id, 7);
        assert_eq!(resource.resource_type, ResourceType::Audio);
        assert_eq!(
            resource.upload_date,
            NaiveDate::from_ymd_opt(2023, 8, 1).unwrap()
        );
        assert!(resource.is_favorite);
        assert!(!resource.is_trending);
        assert!(resource.description.is_empty());
    }
}
