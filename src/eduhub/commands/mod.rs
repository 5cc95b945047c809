use crate::config::EduhubConfig;
use crate::download::DownloadRequest;
use crate::error::{EduhubError, Result};
use crate::model::{Resource, ResourceType, Scope};
use crate::state::QueryState;
use std::path::PathBuf;

pub mod config;
pub mod download;
pub mod favorite;
pub mod filters;
pub mod helpers;
pub mod init;
pub mod list;
pub mod share;
pub mod view;

#[derive(Debug, Clone)]
pub struct EduhubPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl EduhubPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| EduhubError::Config("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the UI. Each command fills the fields it
/// produces and leaves the rest empty.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Query results, in display order
    pub listed_resources: Vec<Resource>,
    /// Size of the whole catalog, for "Showing N of M"
    pub catalog_size: usize,
    /// The state the listing was produced with
    pub state: Option<QueryState>,
    pub affected_resources: Vec<Resource>,
    pub preview: Option<Resource>,
    pub categories: Vec<String>,
    pub types: Vec<ResourceType>,
    pub downloads: Vec<DownloadRequest>,
    pub config: Option<EduhubConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_resources(mut self, resources: Vec<Resource>, catalog_size: usize) -> Self {
        self.listed_resources = resources;
        self.catalog_size = catalog_size;
        self
    }

    pub fn with_state(mut self, state: QueryState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_preview(mut self, resource: Resource) -> Self {
        self.preview = Some(resource);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_types(mut self, types: Vec<ResourceType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_config(mut self, config: EduhubConfig) -> Self {
        self.config = Some(config);
        self
    }
}
