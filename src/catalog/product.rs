use serde::{Deserialize, Serialize};

/// Identifier assigned to a product by the catalog service.
pub type ProductId = u64;

/// A catalog item as served by the data source.
///
/// Products are plain values: every store keeps its own clone, so a
/// favorited product never aliases the catalog's copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URI.
    pub image: String,
    pub rating: Rating,
}

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score in `[0, 5]`.
    pub rate: f64,
    pub count: u64,
}

/// Reason a decoded product was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidProduct {
    #[error("product {id} has invalid price {price}")]
    Price { id: ProductId, price: f64 },

    #[error("product {id} has rating {rate} outside [0, 5]")]
    Rating { id: ProductId, rate: f64 },
}

impl Product {
    /// Checks the numeric invariants the data source is expected to uphold.
    pub fn validate(&self) -> Result<(), InvalidProduct> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(InvalidProduct::Price {
                id: self.id,
                price: self.price,
            });
        }

        let rate = self.rating.rate;
        if !rate.is_finite() || !(0.0..=5.0).contains(&rate) {
            return Err(InvalidProduct::Rating { id: self.id, rate });
        }

        Ok(())
    }
}
