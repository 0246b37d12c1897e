//! Client-side state: one MVI store per concern plus derived views.
//!
//! - [`catalog`]: fetched products/categories and the load lifecycle
//! - [`filters`]: search, category and sort criteria
//! - [`favorites`]: the session's favorite products
//! - [`selectors`]: the visible product list derived from the above

pub mod catalog;
pub mod debounce;
pub mod favorites;
pub mod filters;
pub mod mvi;
pub mod selectors;
