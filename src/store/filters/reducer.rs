use crate::store::filters::intent::FiltersIntent;
use crate::store::filters::state::FiltersState;
use crate::store::mvi::Reducer;

pub struct FiltersReducer;

impl Reducer for FiltersReducer {
    type State = FiltersState;
    type Intent = FiltersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FiltersIntent::SetSearchQuery(search_query) => FiltersState {
                search_query,
                ..state
            },
            FiltersIntent::SetSelectedCategory(selected_category) => FiltersState {
                selected_category,
                ..state
            },
            FiltersIntent::SetSortBy(sort_by) => FiltersState { sort_by, ..state },
            FiltersIntent::Reset => FiltersState::default(),
        }
    }
}
