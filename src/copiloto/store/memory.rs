use super::{materialize, CatalogStore};
use crate::error::Result;
use crate::model::{CatalogItem, CatalogKind, NewItem};

/// In-memory catalogs for testing and embedding.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    courses: Vec<CatalogItem>,
    resources: Vec<CatalogItem>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self, kind: CatalogKind) -> &Vec<CatalogItem> {
        match kind {
            CatalogKind::Courses => &self.courses,
            CatalogKind::Resources => &self.resources,
        }
    }

    fn items_mut(&mut self, kind: CatalogKind) -> &mut Vec<CatalogItem> {
        match kind {
            CatalogKind::Courses => &mut self.courses,
            CatalogKind::Resources => &mut self.resources,
        }
    }
}

impl CatalogStore for MemoryCatalog {
    fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>> {
        Ok(self.items(kind).clone())
    }

    fn append(&mut self, kind: CatalogKind, draft: NewItem) -> Result<CatalogItem> {
        let items = self.items_mut(kind);
        let item = materialize(items, draft);
        items.push(item.clone());
        Ok(item)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::seed;

    /// A memory store preloaded with the starter catalogs, appended through
    /// the trait so ids and timestamps follow the normal rules.
    pub fn seeded() -> MemoryCatalog {
        let mut store = MemoryCatalog::new();
        for kind in CatalogKind::all() {
            for draft in seed::drafts(kind) {
                store.append(kind, draft.clone()).unwrap();
            }
        }
        store
    }
}
