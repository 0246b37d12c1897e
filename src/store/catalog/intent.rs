use crate::catalog::Product;
use crate::store::catalog::state::{Generation, LoadKind};
use crate::store::mvi::Intent;

/// Load lifecycle events plus the one synchronous catalog action.
///
/// Resolutions carry the generation handed out by the matching `Pending`;
/// the reducer ignores any whose generation is no longer current.
#[derive(Debug, Clone)]
pub enum CatalogIntent {
    Pending(LoadKind),
    ProductsLoaded {
        generation: Generation,
        items: Vec<Product>,
    },
    ProductLoaded {
        generation: Generation,
        product: Product,
    },
    CategoriesLoaded {
        generation: Generation,
        categories: Vec<String>,
    },
    Rejected {
        kind: LoadKind,
        generation: Generation,
        message: String,
    },
    ClearCurrentProduct,
}

impl Intent for CatalogIntent {}
