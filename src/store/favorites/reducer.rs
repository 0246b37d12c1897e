use crate::store::favorites::intent::FavoritesIntent;
use crate::store::favorites::state::FavoritesState;
use crate::store::mvi::Reducer;

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Intent = FavoritesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesIntent::Add(product) => {
                if state.is_favorite(product.id) {
                    return state;
                }
                let mut items = state.items;
                items.push(product);
                FavoritesState { items }
            }
            FavoritesIntent::Remove(id) => {
                let mut items = state.items;
                items.retain(|item| item.id != id);
                FavoritesState { items }
            }
            FavoritesIntent::Clear => FavoritesState::default(),
            FavoritesIntent::Toggle(product) => {
                if state.is_favorite(product.id) {
                    Self::reduce(state, FavoritesIntent::Remove(product.id))
                } else {
                    Self::reduce(state, FavoritesIntent::Add(product))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::selectors::favorite_ids;
    use crate::catalog::{Product, Rating};

    fn product(id: u64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 10.0,
            description: String::new(),
            category: "misc".to_string(),
            image: String::new(),
            rating: Rating { rate: 4.0, count: 1 },
        }
    }

    fn with(items: Vec<Product>) -> FavoritesState {
        FavoritesState { items }
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let state = FavoritesReducer::reduce(
            FavoritesState::default(),
            FavoritesIntent::Add(product(2, "Two")),
        );
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Add(product(1, "One")));
        assert_eq!(favorite_ids(&state), vec![2, 1]);
    }

    #[test]
    fn add_same_id_twice_keeps_length() {
        let state = FavoritesReducer::reduce(
            FavoritesState::default(),
            FavoritesIntent::Add(product(1, "One")),
        );
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Add(product(1, "One")));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn add_keeps_first_snapshot_for_duplicate_id() {
        let state = with(vec![product(1, "Original")]);
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Add(product(1, "Renamed")));
        assert_eq!(state.items[0].title, "Original");
    }

    #[test]
    fn repeated_adds_never_duplicate_ids() {
        let mut state = FavoritesState::default();
        for id in [3, 1, 3, 2, 1, 1, 2, 3] {
            state = FavoritesReducer::reduce(state, FavoritesIntent::Add(product(id, "p")));
        }
        assert_eq!(favorite_ids(&state), vec![3, 1, 2]);
    }

    #[test]
    fn remove_drops_matching_entry() {
        let state = with(vec![product(1, "P1"), product(2, "P2")]);
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Remove(1));
        assert_eq!(state.items, vec![product(2, "P2")]);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let state = with(vec![product(1, "P1")]);
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Remove(42));
        assert_eq!(favorite_ids(&state), vec![1]);
    }

    #[test]
    fn clear_empties_idempotently() {
        let state = with(vec![product(1, "P1"), product(2, "P2")]);
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Clear);
        assert!(state.is_empty());
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Clear);
        assert!(state.is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let state = FavoritesReducer::reduce(
            FavoritesState::default(),
            FavoritesIntent::Toggle(product(5, "Five")),
        );
        assert!(state.is_favorite(5));
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Toggle(product(5, "Five")));
        assert!(!state.is_favorite(5));
    }

    #[test]
    fn is_favorite_both_branches() {
        let state = with(vec![product(1, "P1")]);
        assert!(state.is_favorite(1));
        assert!(!state.is_favorite(2));
    }
}
