//! Derived views over store state.
//!
//! `visible_products` is a pure function of its four inputs.
//! [`VisibleProductsCache`] memoizes it for a single owner.

use crate::catalog::{Product, ProductId};
use crate::store::favorites::FavoritesState;
use crate::store::filters::{FiltersState, SortBy, ALL_CATEGORIES};

/// Computes the product list the listing view shows.
///
/// Search matches titles case-insensitively; category match is exact and
/// case-sensitive. Price sorts are stable.
pub fn visible_products(
    items: &[Product],
    search_query: &str,
    selected_category: &str,
    sort_by: SortBy,
) -> Vec<Product> {
    let mut visible: Vec<Product> = items.to_vec();

    if !search_query.trim().is_empty() {
        let query = search_query.to_lowercase();
        visible.retain(|product| product.title.to_lowercase().contains(&query));
    }

    if selected_category != ALL_CATEGORIES {
        visible.retain(|product| product.category == selected_category);
    }

    match sort_by {
        SortBy::Default => {}
        SortBy::PriceLow => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHigh => visible.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    visible
}

/// Ids of the favorites, in insertion order.
pub fn favorite_ids(favorites: &FavoritesState) -> Vec<ProductId> {
    favorites.items.iter().map(|item| item.id).collect()
}

/// Last-inputs/last-output memo for [`visible_products`].
#[derive(Debug, Default)]
pub struct VisibleProductsCache {
    last: Option<CacheEntry>,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
struct CacheEntry {
    items: Vec<Product>,
    filters: FiltersState,
    output: Vec<Product>,
}

impl VisibleProductsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visible list, recomputing only when an input changed.
    pub fn get(&mut self, items: &[Product], filters: &FiltersState) -> &[Product] {
        let fresh = matches!(
            &self.last,
            Some(entry) if entry.items == items && entry.filters == *filters
        );

        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            let output = visible_products(
                items,
                &filters.search_query,
                &filters.selected_category,
                filters.sort_by,
            );
            self.last = Some(CacheEntry {
                items: items.to_vec(),
                filters: filters.clone(),
                output,
            });
        }

        match &self.last {
            Some(entry) => entry.output.as_slice(),
            None => &[],
        }
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
