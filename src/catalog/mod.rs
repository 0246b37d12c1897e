//! Boundary to the remote catalog service.
//!
//! Exposes the product model, the [`CatalogSource`] seam and its HTTP
//! implementation [`CatalogClient`].

mod client;
mod error;
mod product;

pub use client::{CatalogClient, CatalogSource};
pub use error::FetchError;
pub use product::{InvalidProduct, Product, ProductId, Rating};
