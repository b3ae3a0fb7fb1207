//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for every UI, whether that is the CLI in `main.rs` or the
//! request adapter in [`crate::adapter`].
//!
//! It dispatches to the right command, threads the favorites store and
//! configuration through, and returns structured `CmdResult`s. Business
//! logic lives in `commands/*.rs`; presentation stays with the caller.
//!
//! `CopilotoApi<S: CatalogStore>` is generic over the storage backend:
//! production runs on `FileCatalog`, tests on `MemoryCatalog`.

use std::path::PathBuf;

use crate::commands;
use crate::config::CopilotoConfig;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::model::{CatalogKind, NewItem};
use crate::query::QueryFilter;
use crate::store::CatalogStore;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::favorites::FavoriteAction;
pub use crate::commands::{CmdMessage, CmdResult, ListedItem, MessageLevel};

/// The main API facade for copiloto operations.
pub struct CopilotoApi<S: CatalogStore> {
    store: S,
    favorites: FavoritesStore,
    config: CopilotoConfig,
    data_dir: PathBuf,
}

impl<S: CatalogStore> CopilotoApi<S> {
    pub fn new(
        store: S,
        favorites: FavoritesStore,
        config: CopilotoConfig,
        data_dir: PathBuf,
    ) -> Self {
        Self {
            store,
            favorites,
            config,
            data_dir,
        }
    }

    /// Direct access to the store, for clients that speak the adapter's
    /// request/response shapes.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn list(&self, kind: CatalogKind, filter: &QueryFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.favorites, &self.config, kind, filter)
    }

    pub fn create(&mut self, kind: CatalogKind, draft: NewItem) -> Result<CmdResult> {
        commands::create::run(&mut self.store, kind, draft)
    }

    pub fn favorite(
        &mut self,
        kind: CatalogKind,
        id: u64,
        action: FavoriteAction,
    ) -> Result<CmdResult> {
        commands::favorites::update(&self.store, &mut self.favorites, kind, id, action)
    }

    pub fn favorites(&self, kind: CatalogKind) -> Result<CmdResult> {
        commands::favorites::list(&self.store, &self.favorites, kind)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        // Keep listings in step with an edit made through this facade.
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryCatalog;

    fn api(temp: &tempfile::TempDir) -> CopilotoApi<MemoryCatalog> {
        CopilotoApi::new(
            MemoryCatalog::new(),
            FavoritesStore::load(temp.path()).unwrap(),
            CopilotoConfig::default(),
            temp.path().to_path_buf(),
        )
    }

    #[test]
    fn init_list_create_roundtrip() {
        let temp = tempfile::tempdir().unwrap();
        let mut api = api(&temp);

        api.init().unwrap();
        let result = api.list(CatalogKind::Courses, &QueryFilter::new()).unwrap();
        assert_eq!(result.listed_items.len(), 6);

        api.create(CatalogKind::Courses, NewItem::new("Nuevo", ""))
            .unwrap();
        let result = api.list(CatalogKind::Courses, &QueryFilter::new()).unwrap();
        assert_eq!(result.listed_items.len(), 7);
    }

    #[test]
    fn favorite_marks_show_in_listings() {
        let temp = tempfile::tempdir().unwrap();
        let mut api = api(&temp);
        api.init().unwrap();

        api.favorite(CatalogKind::Courses, 2, FavoriteAction::Add)
            .unwrap();

        let result = api.favorites(CatalogKind::Courses).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].item.id, 2);
    }

    #[test]
    fn config_edits_apply_to_subsequent_listings() {
        let temp = tempfile::tempdir().unwrap();
        let mut api = api(&temp);
        api.init().unwrap();

        api.config(ConfigAction::Set {
            key: "list-limit".into(),
            value: "3".into(),
        })
        .unwrap();

        let result = api.list(CatalogKind::Courses, &QueryFilter::new()).unwrap();
        assert_eq!(result.listed_items.len(), 3);
    }
}
