use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CatalogKind;
use crate::seed;
use crate::store::CatalogStore;

/// Seeds the starter catalogs. Safe to run repeatedly: a catalog that
/// already has items is left alone.
pub fn run<S: CatalogStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for kind in CatalogKind::all() {
        if !store.list(kind)?.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "Catalog '{}' already has entries, skipping.",
                kind
            )));
            continue;
        }

        let drafts = seed::drafts(kind);
        for draft in drafts {
            store.append(kind, draft.clone())?;
        }
        result.add_message(CmdMessage::success(format!(
            "Seeded catalog '{}' with {} entries.",
            kind,
            drafts.len()
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryCatalog;

    #[test]
    fn seeds_both_catalogs() {
        let mut store = MemoryCatalog::new();
        run(&mut store).unwrap();

        assert_eq!(store.list(CatalogKind::Courses).unwrap().len(), 6);
        assert_eq!(store.list(CatalogKind::Resources).unwrap().len(), 5);
    }

    #[test]
    fn is_idempotent() {
        let mut store = MemoryCatalog::new();
        run(&mut store).unwrap();
        run(&mut store).unwrap();

        assert_eq!(store.list(CatalogKind::Courses).unwrap().len(), 6);
        assert_eq!(store.list(CatalogKind::Resources).unwrap().len(), 5);
    }
}
