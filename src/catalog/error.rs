//! Error type surfaced by the catalog client.

use thiserror::Error;

/// A failed read from the catalog service.
///
/// Only the per-operation message is kept; transport and status details are
/// logged at the failure site and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: &'static str,
}

impl FetchError {
    pub const PRODUCTS: FetchError = FetchError::new("Failed to fetch products");
    pub const PRODUCT: FetchError = FetchError::new("Failed to fetch product");
    pub const CATEGORIES: FetchError = FetchError::new("Failed to fetch categories");

    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}
