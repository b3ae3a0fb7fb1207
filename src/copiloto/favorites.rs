//! Favorite item ids, one set per catalog.
//!
//! The store writes `favorites.json` back on every mutation and reloads it
//! at startup, so favorites survive across runs the way the dashboard's
//! local storage does. It is an explicit value handed to whoever needs it,
//! never ambient state.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CopilotoError, Result};
use crate::model::CatalogKind;

const FAVORITES_FILENAME: &str = "favorites.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct FavoriteSets {
    #[serde(default)]
    courses: BTreeSet<u64>,
    #[serde(default)]
    resources: BTreeSet<u64>,
}

/// Per-user favorites, keyed by catalog and item id.
#[derive(Debug)]
pub struct FavoritesStore {
    dir: PathBuf,
    sets: FavoriteSets,
}

impl FavoritesStore {
    /// Load favorites from `dir`, or start empty if no file exists yet.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let path = dir.join(FAVORITES_FILENAME);
        let sets = if path.exists() {
            let content = fs::read_to_string(&path).map_err(CopilotoError::Io)?;
            serde_json::from_str(&content).map_err(CopilotoError::Serialization)?
        } else {
            FavoriteSets::default()
        };
        Ok(Self { dir, sets })
    }

    fn save(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(CopilotoError::Io)?;
        }
        let content =
            serde_json::to_string_pretty(&self.sets).map_err(CopilotoError::Serialization)?;
        fs::write(self.dir.join(FAVORITES_FILENAME), content).map_err(CopilotoError::Io)?;
        Ok(())
    }

    fn set(&self, kind: CatalogKind) -> &BTreeSet<u64> {
        match kind {
            CatalogKind::Courses => &self.sets.courses,
            CatalogKind::Resources => &self.sets.resources,
        }
    }

    fn set_mut(&mut self, kind: CatalogKind) -> &mut BTreeSet<u64> {
        match kind {
            CatalogKind::Courses => &mut self.sets.courses,
            CatalogKind::Resources => &mut self.sets.resources,
        }
    }

    /// Mark an item as favorite. Returns true if it was newly added.
    pub fn add(&mut self, kind: CatalogKind, id: u64) -> Result<bool> {
        let added = self.set_mut(kind).insert(id);
        if added {
            self.save()?;
        }
        Ok(added)
    }

    /// Unmark an item. Returns true if it was a favorite.
    pub fn remove(&mut self, kind: CatalogKind, id: u64) -> Result<bool> {
        let removed = self.set_mut(kind).remove(&id);
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Flip an item's favorite state. Returns whether it is a favorite
    /// afterwards.
    pub fn toggle(&mut self, kind: CatalogKind, id: u64) -> Result<bool> {
        if self.set(kind).contains(&id) {
            self.remove(kind, id)?;
            Ok(false)
        } else {
            self.add(kind, id)?;
            Ok(true)
        }
    }

    pub fn contains(&self, kind: CatalogKind, id: u64) -> bool {
        self.set(kind).contains(&id)
    }

    /// All favorite ids for a catalog, ascending.
    pub fn ids(&self, kind: CatalogKind) -> Vec<u64> {
        self.set(kind).iter().copied().collect()
    }
}
