use crate::store::catalog::intent::CatalogIntent;
use crate::store::catalog::state::{CatalogState, Generation, LoadKind};
use crate::store::mvi::Reducer;

/// Reducer for the catalog load lifecycle.
///
/// Pure function. The outbound calls happen in the session around the
/// `Pending` and resolution dispatches.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::Pending(kind) => {
                let status = state.status_mut(kind);
                status.loading = true;
                status.error = None;
                status.generation = status.generation.wrapping_add(1);
                state
            }

            CatalogIntent::ProductsLoaded { generation, items } => {
                if settle(&mut state, LoadKind::Products, generation) {
                    state.items = items;
                }
                state
            }

            CatalogIntent::ProductLoaded {
                generation,
                product,
            } => {
                if settle(&mut state, LoadKind::Product, generation) {
                    state.current_product = Some(product);
                }
                state
            }

            CatalogIntent::CategoriesLoaded {
                generation,
                categories,
            } => {
                if settle(&mut state, LoadKind::Categories, generation) {
                    state.categories = categories;
                }
                state
            }

            CatalogIntent::Rejected {
                kind,
                generation,
                message,
            } => {
                if settle(&mut state, kind, generation) {
                    state.status_mut(kind).error = Some(message);
                }
                state
            }

            CatalogIntent::ClearCurrentProduct => {
                state.current_product = None;
                state
            }
        }
    }
}

/// Ends the current request for `kind`. Returns false for a stale generation,
/// leaving the state untouched.
fn settle(state: &mut CatalogState, kind: LoadKind, generation: Generation) -> bool {
    if !state.is_current(kind, generation) {
        return false;
    }
    state.status_mut(kind).loading = false;
    true
}
