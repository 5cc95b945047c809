use crate::commands::{CmdMessage, CmdResult};
use crate::download::{DownloadInitiator, DownloadRequest};
use crate::error::Result;
use crate::model::ResourceId;
use crate::store::CatalogStore;
use tracing::info;

pub fn run<S: CatalogStore, D: DownloadInitiator>(
    store: &S,
    downloader: &mut D,
    id: ResourceId,
) -> Result<CmdResult> {
    let resource = store.get_resource(id)?;
    let request = DownloadRequest::for_resource(&resource);
    downloader.initiate(request.clone())?;
    info!(id, url = %request.url, "download requested");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Downloading {}", resource.name)));
    result.downloads.push(request);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::DownloadQueue;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn hands_request_to_downloader() {
        let store = InMemoryStore::builtin().unwrap();
        let mut queue = DownloadQueue::new();

        let result = run(&store, &mut queue, 4).unwrap();
        assert_eq!(result.messages[0].content, "Downloading Chemistry Lab Safety Protocol");
        assert_eq!(queue.requests().len(), 1);
        assert_eq!(queue.requests()[0].url, "/files/lab-safety.mp4");
        assert_eq!(result.downloads, queue.requests().to_vec());
    }

    #[test]
    fn unknown_id_requests_nothing() {
        let store = InMemoryStore::builtin().unwrap();
        let mut queue = DownloadQueue::new();
        assert!(run(&store, &mut queue, 0).is_err());
        assert!(queue.requests().is_empty());
    }
}
