use crate::store::filters::state::SortBy;
use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FiltersIntent {
    SetSearchQuery(String),
    /// Any label is accepted; unknown labels simply match nothing.
    SetSelectedCategory(String),
    SetSortBy(SortBy),
    Reset,
}

impl Intent for FiltersIntent {}
