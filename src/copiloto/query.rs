//! Catalog query engine.
//!
//! Each catalog declares its categorical axes as [`AxisSpec`] entries, and
//! [`query`] narrows a snapshot of items through the active axis filters
//! followed by free-text search. Axis matching is exact and case-sensitive;
//! search is a case-insensitive substring scan over title, description and
//! instructor. The engine never mutates its inputs and has no failure mode:
//! empty criteria return the input unchanged, filter keys naming no declared
//! axis are ignored.

use std::collections::BTreeMap;

use crate::model::{CatalogItem, CatalogKind};

/// One categorical axis of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSpec {
    pub name: &'static str,
    /// Filter value meaning "no restriction" (e.g. "Todas").
    pub wildcard: Option<&'static str>,
    /// Item value that matches every requested filter value (e.g. a resource
    /// tagged sector "Todos" applies to all sectors).
    pub item_wildcard: Option<&'static str>,
}

impl AxisSpec {
    fn matches(&self, item: &CatalogItem, wanted: &str) -> bool {
        match item.field(self.name) {
            Some(value) => value == wanted || self.item_wildcard == Some(value),
            None => false,
        }
    }
}

/// The declared axes of one catalog, in evaluation order.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSchema {
    pub axes: &'static [AxisSpec],
}

const COURSE_SCHEMA: CatalogSchema = CatalogSchema {
    axes: &[
        AxisSpec {
            name: "category",
            wildcard: Some("Todas"),
            item_wildcard: None,
        },
        AxisSpec {
            name: "level",
            wildcard: Some("Todas"),
            item_wildcard: None,
        },
    ],
};

const RESOURCE_SCHEMA: CatalogSchema = CatalogSchema {
    axes: &[
        AxisSpec {
            name: "category",
            wildcard: Some("Todas"),
            item_wildcard: None,
        },
        AxisSpec {
            name: "sector",
            wildcard: Some("Todos"),
            item_wildcard: Some("Todos"),
        },
        AxisSpec {
            name: "stage",
            wildcard: None,
            item_wildcard: None,
        },
    ],
};

/// Axis schema for a catalog kind.
pub fn schema(kind: CatalogKind) -> &'static CatalogSchema {
    match kind {
        CatalogKind::Courses => &COURSE_SCHEMA,
        CatalogKind::Resources => &RESOURCE_SCHEMA,
    }
}

/// Filter criteria for one query.
///
/// Absent and empty-string values leave the corresponding axis unrestricted,
/// as does a value equal to the axis's wildcard sentinel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilter {
    pub axes: BTreeMap<String, String>,
    pub search: Option<String>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: restrict an axis.
    pub fn axis(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.axes.insert(name.into(), value.into());
        self
    }

    /// Convenience: set the free-text search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// Select the subset of `items` matching `filter`, preserving input order.
///
/// Axes narrow the working set in schema order before the substring scan
/// runs, so the cheap equality checks come first. The result is the
/// intersection of all active predicates either way; the order only buys
/// the short-circuit to empty.
pub fn query(
    schema: &CatalogSchema,
    items: &[CatalogItem],
    filter: &QueryFilter,
) -> Vec<CatalogItem> {
    let mut matched: Vec<&CatalogItem> = items.iter().collect();

    for axis in schema.axes {
        let Some(wanted) = filter.axes.get(axis.name) else {
            continue;
        };
        if wanted.is_empty() || axis.wildcard == Some(wanted.as_str()) {
            continue;
        }
        matched.retain(|item| axis.matches(item, wanted));
        if matched.is_empty() {
            return Vec::new();
        }
    }

    if let Some(term) = filter.search.as_deref() {
        if !term.is_empty() {
            let needle = term.to_lowercase();
            matched.retain(|item| text_matches(item, &needle));
        }
    }

    matched.into_iter().cloned().collect()
}

fn text_matches(item: &CatalogItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item
            .instructor
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle))
}
