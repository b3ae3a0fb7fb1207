use std::fs;
use std::path::{Path, PathBuf};

use super::{materialize, CatalogStore};
use crate::error::{CopilotoError, Result};
use crate::model::{CatalogItem, CatalogKind, NewItem};

/// File-backed catalogs: one pretty-printed JSON array per catalog under the
/// data directory. A missing file reads as an empty catalog.
pub struct FileCatalog {
    data_dir: PathBuf,
}

impl FileCatalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn catalog_path(&self, kind: CatalogKind) -> PathBuf {
        self.data_dir.join(format!("{}.json", kind.as_str()))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CopilotoError::Io)?;
        }
        Ok(())
    }

    fn load(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>> {
        let path = self.catalog_path(kind);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(CopilotoError::Io)?;
        let items: Vec<CatalogItem> =
            serde_json::from_str(&content).map_err(CopilotoError::Serialization)?;
        Ok(items)
    }

    fn save(&self, kind: CatalogKind, items: &[CatalogItem]) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(items).map_err(CopilotoError::Serialization)?;
        fs::write(self.catalog_path(kind), content).map_err(CopilotoError::Io)?;
        Ok(())
    }
}

impl CatalogStore for FileCatalog {
    fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>> {
        self.load(kind)
    }

    fn append(&mut self, kind: CatalogKind, draft: NewItem) -> Result<CatalogItem> {
        let mut items = self.load(kind)?;
        let item = materialize(&items, draft);
        items.push(item.clone());
        self.save(kind, &items)?;
        log::debug!("appended {} id {} to {}", kind, item.id, self.catalog_path(kind).display());
        Ok(item)
    }
}
