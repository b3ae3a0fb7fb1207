use crate::commands::{CmdMessage, CmdResult, ListedItem};
use crate::config::CopilotoConfig;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::model::CatalogKind;
use crate::query::{self, QueryFilter};
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(
    store: &S,
    favorites: &FavoritesStore,
    config: &CopilotoConfig,
    kind: CatalogKind,
    filter: &QueryFilter,
) -> Result<CmdResult> {
    let mut items = store.list(kind)?;
    if !config.include_inactive {
        items.retain(|item| item.is_active);
    }

    let mut matched = query::query(query::schema(kind), &items, filter);
    if let Some(limit) = config.list_limit {
        matched.truncate(limit);
    }

    let listed = matched
        .into_iter()
        .map(|item| ListedItem {
            is_favorite: favorites.contains(kind, item.id),
            item,
        })
        .collect();

    let mut result = CmdResult::default().with_listed_items(listed);
    if items.is_empty() {
        result.add_message(CmdMessage::info(
            "Catalog is empty. Run 'init' to load the starter catalogs.",
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewItem;
    use crate::store::memory::fixtures;

    fn favorites(temp: &tempfile::TempDir) -> FavoritesStore {
        FavoritesStore::load(temp.path()).unwrap()
    }

    /// Store serving a canned snapshot, for exercising the inactive filter.
    struct FixedStore(Vec<crate::model::CatalogItem>);

    impl CatalogStore for FixedStore {
        fn list(&self, _kind: CatalogKind) -> Result<Vec<crate::model::CatalogItem>> {
            Ok(self.0.clone())
        }

        fn append(
            &mut self,
            _kind: CatalogKind,
            draft: NewItem,
        ) -> Result<crate::model::CatalogItem> {
            let item = crate::store::materialize(&self.0, draft);
            self.0.push(item.clone());
            Ok(item)
        }
    }

    #[test]
    fn lists_all_items_without_criteria() {
        let temp = tempfile::tempdir().unwrap();
        let store = fixtures::seeded();

        let result = run(
            &store,
            &favorites(&temp),
            &CopilotoConfig::default(),
            CatalogKind::Courses,
            &QueryFilter::new(),
        )
        .unwrap();
        assert_eq!(result.listed_items.len(), 6);
    }

    fn store_with_retired_course() -> FixedStore {
        let mut store = FixedStore(Vec::new());
        store
            .append(CatalogKind::Courses, NewItem::new("Activo", ""))
            .unwrap();
        store
            .append(CatalogKind::Courses, NewItem::new("Retirado", ""))
            .unwrap();
        store.0[1].is_active = false;
        store
    }

    #[test]
    fn hides_inactive_items_by_default() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with_retired_course();

        let result = run(
            &store,
            &favorites(&temp),
            &CopilotoConfig::default(),
            CatalogKind::Courses,
            &QueryFilter::new(),
        )
        .unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].item.title, "Activo");
    }

    #[test]
    fn include_inactive_config_shows_everything() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with_retired_course();
        let config = CopilotoConfig {
            include_inactive: true,
            list_limit: None,
        };

        let result = run(
            &store,
            &favorites(&temp),
            &config,
            CatalogKind::Courses,
            &QueryFilter::new(),
        )
        .unwrap();
        assert_eq!(result.listed_items.len(), 2);
    }

    #[test]
    fn list_limit_truncates_after_filtering() {
        let temp = tempfile::tempdir().unwrap();
        let store = fixtures::seeded();
        let config = CopilotoConfig {
            include_inactive: false,
            list_limit: Some(2),
        };

        let result = run(
            &store,
            &favorites(&temp),
            &config,
            CatalogKind::Courses,
            &QueryFilter::new(),
        )
        .unwrap();
        assert_eq!(result.listed_items.len(), 2);
        assert_eq!(result.listed_items[0].item.id, 1);
        assert_eq!(result.listed_items[1].item.id, 2);
    }

    #[test]
    fn marks_favorites_in_listing() {
        let temp = tempfile::tempdir().unwrap();
        let store = fixtures::seeded();
        let mut favs = favorites(&temp);
        favs.add(CatalogKind::Courses, 2).unwrap();

        let result = run(
            &store,
            &favs,
            &CopilotoConfig::default(),
            CatalogKind::Courses,
            &QueryFilter::new().axis("category", "Marketing"),
        )
        .unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert!(result.listed_items[0].is_favorite);
    }
}
