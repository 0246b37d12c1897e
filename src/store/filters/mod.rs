mod intent;
mod reducer;
mod state;

pub use intent::FiltersIntent;
pub use reducer::FiltersReducer;
pub use state::{FiltersState, ParseSortByError, SortBy, ALL_CATEGORIES};
