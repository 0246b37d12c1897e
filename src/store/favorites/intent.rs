use crate::catalog::{Product, ProductId};
use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FavoritesIntent {
    /// Append unless a product with the same id is already present.
    Add(Product),
    /// Drop the entry with this id, if any.
    Remove(ProductId),
    Clear,
    /// Remove when present, add otherwise.
    Toggle(Product),
}

impl Intent for FavoritesIntent {}
