use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CopilotoError, Result};
use crate::model::{CatalogKind, NewItem};
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &mut S, kind: CatalogKind, draft: NewItem) -> Result<CmdResult> {
    if draft.title.is_empty() {
        return Err(CopilotoError::Api("Title cannot be empty".into()));
    }

    let item = store.append(kind, draft)?;
    let mut result = CmdResult::default().with_affected_items(vec![item.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Created '{}' (id {}).",
        item.title, item.id
    )));
    Ok(result)
}
