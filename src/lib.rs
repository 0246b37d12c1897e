//! Client-side core of a product catalog browser.
//!
//! Fetches products and categories from a remote catalog, derives the
//! visible list from search/category/sort criteria, and keeps an in-memory
//! favorites collection.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod session;
pub mod store;

pub use catalog::{CatalogClient, CatalogSource, FetchError, Product, ProductId, Rating};
pub use session::{LoadOutcome, Session};
