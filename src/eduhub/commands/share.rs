use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ResourceId;
use crate::store::CatalogStore;

/// Sharing has no destination yet; the resource is checked and the user told so.
pub fn run<S: CatalogStore>(store: &S, id: ResourceId) -> Result<CmdResult> {
    let resource = store.get_resource(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning(format!(
        "Sharing is not available for {}",
        resource.name
    )));
    Ok(result)
}
