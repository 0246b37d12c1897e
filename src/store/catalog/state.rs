use std::fmt;

use crate::catalog::Product;
use crate::store::mvi::StoreState;

/// Per-slot request counter. The highest value is the only request whose
/// resolution is still applied.
pub type Generation = u64;

/// The three independent loads the catalog store tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadKind {
    Products,
    Product,
    Categories,
}

impl fmt::Display for LoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadKind::Products => "products",
            LoadKind::Product => "product",
            LoadKind::Categories => "categories",
        };
        f.write_str(name)
    }
}

/// Status of one load kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadStatus {
    /// True while the newest request for this kind is outstanding.
    pub loading: bool,
    /// Message of the newest request's failure, cleared when a new request starts.
    pub error: Option<String>,
    pub generation: Generation,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    /// Products in the order the catalog returned them.
    pub items: Vec<Product>,
    pub categories: Vec<String>,
    /// Subject of the detail view.
    pub current_product: Option<Product>,
    pub products_status: LoadStatus,
    pub product_status: LoadStatus,
    pub categories_status: LoadStatus,
}

impl StoreState for CatalogState {}

impl CatalogState {
    pub fn status(&self, kind: LoadKind) -> &LoadStatus {
        match kind {
            LoadKind::Products => &self.products_status,
            LoadKind::Product => &self.product_status,
            LoadKind::Categories => &self.categories_status,
        }
    }

    pub(super) fn status_mut(&mut self, kind: LoadKind) -> &mut LoadStatus {
        match kind {
            LoadKind::Products => &mut self.products_status,
            LoadKind::Product => &mut self.product_status,
            LoadKind::Categories => &mut self.categories_status,
        }
    }

    /// True when `generation` is still the newest request for `kind`.
    pub fn is_current(&self, kind: LoadKind, generation: Generation) -> bool {
        self.status(kind).generation == generation
    }

    /// True while any load is outstanding.
    pub fn is_loading(&self) -> bool {
        self.products_status.loading || self.product_status.loading || self.categories_status.loading
    }

    /// First error among products, product and categories, in that order.
    pub fn error(&self) -> Option<&str> {
        [
            &self.products_status,
            &self.product_status,
            &self.categories_status,
        ]
        .into_iter()
        .find_map(|status| status.error.as_deref())
    }
}
