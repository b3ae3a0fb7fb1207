use crate::commands::{CmdMessage, CmdResult, ListedItem};
use crate::error::{CopilotoError, Result};
use crate::favorites::FavoritesStore;
use crate::model::CatalogKind;
use crate::store::CatalogStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
    Toggle,
}

/// Mutate one item's favorite state. The id must name an existing item so
/// the favorites file never accumulates dangling references.
pub fn update<S: CatalogStore>(
    store: &S,
    favorites: &mut FavoritesStore,
    kind: CatalogKind,
    id: u64,
    action: FavoriteAction,
) -> Result<CmdResult> {
    let items = store.list(kind)?;
    let Some(item) = items.iter().find(|item| item.id == id) else {
        return Err(CopilotoError::ItemNotFound(id));
    };

    let mut result = CmdResult::default();
    match action {
        FavoriteAction::Add => {
            if favorites.add(kind, id)? {
                result.add_message(CmdMessage::success(format!(
                    "Added '{}' to favorites.",
                    item.title
                )));
            } else {
                result.add_message(CmdMessage::info(format!(
                    "'{}' is already a favorite.",
                    item.title
                )));
            }
        }
        FavoriteAction::Remove => {
            if favorites.remove(kind, id)? {
                result.add_message(CmdMessage::success(format!(
                    "Removed '{}' from favorites.",
                    item.title
                )));
            } else {
                result.add_message(CmdMessage::info(format!(
                    "'{}' is not a favorite.",
                    item.title
                )));
            }
        }
        FavoriteAction::Toggle => {
            if favorites.toggle(kind, id)? {
                result.add_message(CmdMessage::success(format!(
                    "Added '{}' to favorites.",
                    item.title
                )));
            } else {
                result.add_message(CmdMessage::success(format!(
                    "Removed '{}' from favorites.",
                    item.title
                )));
            }
        }
    }

    Ok(result)
}

/// List the favorite items of one catalog, in catalog order.
pub fn list<S: CatalogStore>(
    store: &S,
    favorites: &FavoritesStore,
    kind: CatalogKind,
) -> Result<CmdResult> {
    let listed = store
        .list(kind)?
        .into_iter()
        .filter(|item| favorites.contains(kind, item.id))
        .map(|item| ListedItem {
            is_favorite: true,
            item,
        })
        .collect();

    Ok(CmdResult::default().with_listed_items(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    fn favorites(temp: &tempfile::TempDir) -> FavoritesStore {
        FavoritesStore::load(temp.path()).unwrap()
    }

    #[test]
    fn add_then_list_returns_catalog_order() {
        let temp = tempfile::tempdir().unwrap();
        let store = fixtures::seeded();
        let mut favs = favorites(&temp);

        update(&store, &mut favs, CatalogKind::Courses, 5, FavoriteAction::Add).unwrap();
        update(&store, &mut favs, CatalogKind::Courses, 2, FavoriteAction::Add).unwrap();

        let result = list(&store, &favs, CatalogKind::Courses).unwrap();
        let ids: Vec<u64> = result.listed_items.iter().map(|li| li.item.id).collect();
        assert_eq!(ids, [2, 5]);
        assert!(result.listed_items.iter().all(|li| li.is_favorite));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let temp = tempfile::tempdir().unwrap();
        let store = fixtures::seeded();
        let mut favs = favorites(&temp);

        update(&store, &mut favs, CatalogKind::Courses, 3, FavoriteAction::Toggle).unwrap();
        assert!(favs.contains(CatalogKind::Courses, 3));

        update(&store, &mut favs, CatalogKind::Courses, 3, FavoriteAction::Toggle).unwrap();
        assert!(!favs.contains(CatalogKind::Courses, 3));
    }

    #[test]
    fn unknown_id_is_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let store = fixtures::seeded();
        let mut favs = favorites(&temp);

        let err =
            update(&store, &mut favs, CatalogKind::Courses, 99, FavoriteAction::Add).unwrap_err();
        assert!(matches!(err, CopilotoError::ItemNotFound(99)));
    }

    #[test]
    fn remove_reports_when_not_a_favorite() {
        let temp = tempfile::tempdir().unwrap();
        let store = fixtures::seeded();
        let mut favs = favorites(&temp);

        let result =
            update(&store, &mut favs, CatalogKind::Courses, 1, FavoriteAction::Remove).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("not a favorite"));
    }
}
