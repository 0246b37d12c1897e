use std::fmt;
use std::str::FromStr;

use crate::store::mvi::StoreState;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Ordering applied to the visible product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Keep the catalog's order.
    #[default]
    Default,
    PriceLow,
    PriceHigh,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Default => "default",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode '{0}' (expected default, price-low or price-high)")]
pub struct ParseSortByError(String);

impl FromStr for SortBy {
    type Err = ParseSortByError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortBy::Default),
            "price-low" => Ok(SortBy::PriceLow),
            "price-high" => Ok(SortBy::PriceHigh),
            other => Err(ParseSortByError(other.to_string())),
        }
    }
}

/// Search, category and sort criteria. Each field is independent.
#[derive(Debug, Clone, PartialEq)]
pub struct FiltersState {
    /// Title substring; empty means no search filter.
    pub search_query: String,
    /// [`ALL_CATEGORIES`] or an exact category label.
    pub selected_category: String,
    pub sort_by: SortBy,
}

impl Default for FiltersState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            sort_by: SortBy::Default,
        }
    }
}

impl StoreState for FiltersState {}

impl FiltersState {
    /// True when any criterion differs from its default.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_round_trips_through_str() {
        for mode in [SortBy::Default, SortBy::PriceLow, SortBy::PriceHigh] {
            assert_eq!(mode.as_str().parse::<SortBy>(), Ok(mode));
        }
    }

    #[test]
    fn sort_by_rejects_unknown() {
        assert!("cheapest".parse::<SortBy>().is_err());
    }

    #[test]
    fn default_filters_are_inactive() {
        let state = FiltersState::default();
        assert_eq!(state.search_query, "");
        assert_eq!(state.selected_category, "all");
        assert_eq!(state.sort_by, SortBy::Default);
        assert!(!state.is_active());
    }
}
