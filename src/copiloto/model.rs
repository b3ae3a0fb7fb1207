use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CopilotoError;

/// Which catalog an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Courses,
    Resources,
}

impl CatalogKind {
    pub fn all() -> [CatalogKind; 2] {
        [CatalogKind::Courses, CatalogKind::Resources]
    }

    /// File stem used by file-backed stores and the favorites registry.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Courses => "courses",
            CatalogKind::Resources => "resources",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CatalogKind {
    type Err = CopilotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "courses" | "course" => Ok(CatalogKind::Courses),
            "resources" | "resource" => Ok(CatalogKind::Resources),
            other => Err(CopilotoError::UnknownCatalog(other.to_string())),
        }
    }
}

/// A single course or funding resource exposed through the query engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique within its catalog, assigned by the store, never reused.
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Instructor or program owner. Courses carry one; searchable when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    /// Categorical axes (category, level, sector, stage).
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl CatalogItem {
    /// Value of a categorical axis, if the item carries one.
    pub fn field(&self, axis: &str) -> Option<&str> {
        self.fields.get(axis).map(String::as_str)
    }
}

/// Partial item body for the append operation. The store fills in `id`,
/// `created_at` and `is_active`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    pub fields: BTreeMap<String, String>,
}

impl NewItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            instructor: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_instructor(mut self, name: impl Into<String>) -> Self {
        self.instructor = Some(name.into());
        self
    }

    pub fn with_field(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(axis.into(), value.into());
        self
    }
}
