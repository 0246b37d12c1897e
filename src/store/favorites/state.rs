use crate::catalog::{Product, ProductId};
use crate::store::mvi::StoreState;

/// Products the user has marked as favorites, in the order they were added.
///
/// No two entries share an id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    pub items: Vec<Product>,
}

impl StoreState for FavoritesState {}

impl FavoritesState {
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
