//! Fetched catalog data and the load lifecycle that fills it.

mod intent;
mod reducer;
mod state;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::{CatalogState, Generation, LoadKind, LoadStatus};
