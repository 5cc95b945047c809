//! Download requests and the collaborator that carries them out.

use crate::error::Result;
use crate::model::{Resource, ResourceId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRequest {
    pub id: ResourceId,
    pub name: String,
    pub url: String,
}

impl DownloadRequest {
    pub fn for_resource(resource: &Resource) -> Self {
        Self {
            id: resource.id,
            name: resource.name.clone(),
            url: resource.url.clone(),
        }
    }
}

pub trait DownloadInitiator {
    fn initiate(&mut self, request: DownloadRequest) -> Result<()>;
}

/// Keeps requests in order of arrival. Nothing is fetched.
#[derive(Debug, Default, Clone)]
pub struct DownloadQueue {
    requests: Vec<DownloadRequest>,
}

impl DownloadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[DownloadRequest] {
        &self.requests
    }
}

impl DownloadInitiator for DownloadQueue {
    fn initiate(&mut self, request: DownloadRequest) -> Result<()> {
        self.requests.push(request);
        Ok(())
    }
}
