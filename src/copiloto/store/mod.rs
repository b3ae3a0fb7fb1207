//! # Storage Layer
//!
//! This module defines the storage abstraction for the catalogs. The
//! [`CatalogStore`] trait lets the rest of the crate work against different
//! backends:
//!
//! - [`fs::FileCatalog`]: production storage, one JSON array per catalog
//!   (`courses.json`, `resources.json`) under the data directory
//! - [`memory::MemoryCatalog`]: in-memory storage for testing and embedding
//!
//! The store owns creation: [`CatalogStore::append`] assigns ids and
//! timestamps so that every catalog satisfies the same invariants no matter
//! which backend holds it. The query engine never talks to a store; it is
//! handed the snapshot that [`CatalogStore::list`] returns.

use chrono::Utc;

use crate::error::Result;
use crate::model::{CatalogItem, CatalogKind, NewItem};

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait CatalogStore {
    /// Snapshot of a catalog, in insertion order.
    fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>>;

    /// Append a new item, assigning its id and creation timestamp.
    ///
    /// Ids start at 1 and grow by one past the current maximum, so they are
    /// unique and stable for the life of the catalog.
    fn append(&mut self, kind: CatalogKind, draft: NewItem) -> Result<CatalogItem>;
}

/// Materialize a draft against the current catalog contents. Shared by
/// backends so id assignment stays in one place.
pub(crate) fn materialize(items: &[CatalogItem], draft: NewItem) -> CatalogItem {
    let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
    CatalogItem {
        id: next_id,
        title: draft.title,
        description: draft.description,
        instructor: draft.instructor,
        fields: draft.fields,
        is_active: true,
        created_at: Utc::now(),
    }
}
