//! Session facade over the catalog, filter and favorites stores.
//!
//! Owns the three store states, runs the load lifecycle against a
//! [`CatalogSource`], and bumps a revision number on a watch channel after
//! every transition that changed state.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::catalog::{CatalogClient, CatalogSource, FetchError, Product, ProductId};
use crate::config::Config;
use crate::store::catalog::{CatalogIntent, CatalogReducer, CatalogState, Generation, LoadKind};
use crate::store::favorites::{FavoritesIntent, FavoritesReducer, FavoritesState};
use crate::store::filters::{FiltersIntent, FiltersReducer, FiltersState, SortBy};
use crate::store::mvi::Reducer;
use crate::store::selectors::VisibleProductsCache;

/// How a load call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result was stored.
    Fulfilled,
    /// The failure message was stored in the kind's status.
    Rejected(FetchError),
    /// A newer request for the same slot was issued first; the result was dropped.
    Superseded,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
/// The `@changed` form evaluates to whether the state changed.
macro_rules! dispatch_mvi {
    (@changed $state:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let before = $state.$field.clone();
        dispatch_mvi!($state, $field, $reducer, $intent);
        $state.$field != before
    }};
    ($state:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $state.$field = <$reducer>::reduce(std::mem::take(&mut $state.$field), $intent);
    };
}

#[derive(Default)]
struct SessionState {
    catalog: CatalogState,
    filters: FiltersState,
    favorites: FavoritesState,
    visible: VisibleProductsCache,
}

struct SessionInner {
    source: Arc<dyn CatalogSource>,
    state: Mutex<SessionState>,
    revision: watch::Sender<u64>,
}

/// Cheaply cloneable handle; clones share the same stores.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(SessionInner {
                source,
                state: Mutex::new(SessionState::default()),
                revision,
            }),
        }
    }

    /// Session backed by an HTTP [`CatalogClient`] built from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(CatalogClient::new(&config.catalog)))
    }

    /// Receiver that observes a new revision after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.inner.revision.borrow()
    }

    // -- Reads ----------------------------------------------------------------

    pub fn catalog(&self) -> CatalogState {
        self.inner.state.lock().catalog.clone()
    }

    pub fn filters(&self) -> FiltersState {
        self.inner.state.lock().filters.clone()
    }

    pub fn favorites(&self) -> FavoritesState {
        self.inner.state.lock().favorites.clone()
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.inner.state.lock().favorites.is_favorite(id)
    }

    /// The filtered and sorted product list for the current state.
    pub fn visible_products(&self) -> Vec<Product> {
        let mut guard = self.inner.state.lock();
        let SessionState {
            catalog,
            filters,
            visible,
            ..
        } = &mut *guard;
        visible.get(&catalog.items, filters).to_vec()
    }

    // -- Catalog loads --------------------------------------------------------

    pub async fn load_products(&self) -> LoadOutcome {
        let request = self.inner.source.list_products();
        self.run_load(LoadKind::Products, request, |generation, items| {
            tracing::info!(count = items.len(), "Products loaded");
            CatalogIntent::ProductsLoaded { generation, items }
        })
        .await
    }

    /// Loads the detail view's product. `id` may be numeric or a raw route segment.
    pub async fn load_product_by_id(&self, id: impl ToString) -> LoadOutcome {
        let id = id.to_string();
        let request = self.inner.source.get_product(&id);
        self.run_load(LoadKind::Product, request, |generation, product| {
            tracing::info!(id = product.id, "Product loaded");
            CatalogIntent::ProductLoaded {
                generation,
                product,
            }
        })
        .await
    }

    pub async fn load_categories(&self) -> LoadOutcome {
        let request = self.inner.source.list_categories();
        self.run_load(
            LoadKind::Categories,
            request,
            |generation, categories| {
                tracing::info!(count = categories.len(), "Categories loaded");
                CatalogIntent::CategoriesLoaded {
                    generation,
                    categories,
                }
            },
        )
        .await
    }

    /// Forget the detail view's product so a stale one is never shown for a new id.
    pub fn clear_current_product(&self) {
        self.update(|state| {
            dispatch_mvi!(@changed state, catalog, CatalogReducer, CatalogIntent::ClearCurrentProduct)
        });
    }

    async fn run_load<T, F>(
        &self,
        kind: LoadKind,
        request: F,
        fulfilled: impl FnOnce(Generation, T) -> CatalogIntent,
    ) -> LoadOutcome
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        let generation = self.begin(kind);
        let result = request.await;

        let mut guard = self.inner.state.lock();
        if !guard.catalog.is_current(kind, generation) {
            tracing::debug!(%kind, generation, "Dropping superseded load result");
            return LoadOutcome::Superseded;
        }

        let (intent, outcome) = match result {
            Ok(value) => (fulfilled(generation, value), LoadOutcome::Fulfilled),
            Err(error) => {
                tracing::warn!(%kind, error = %error, "Load rejected");
                (
                    CatalogIntent::Rejected {
                        kind,
                        generation,
                        message: error.message().to_string(),
                    },
                    LoadOutcome::Rejected(error),
                )
            }
        };

        if dispatch_mvi!(@changed guard, catalog, CatalogReducer, intent) {
            drop(guard);
            self.notify();
        }
        outcome
    }

    fn begin(&self, kind: LoadKind) -> Generation {
        let generation = {
            let mut guard = self.inner.state.lock();
            dispatch_mvi!(guard, catalog, CatalogReducer, CatalogIntent::Pending(kind));
            guard.catalog.status(kind).generation
        };
        tracing::debug!(%kind, generation, "Load started");
        self.notify();
        generation
    }

    // -- Filters --------------------------------------------------------------

    pub fn dispatch_filters(&self, intent: FiltersIntent) {
        self.update(|state| dispatch_mvi!(@changed state, filters, FiltersReducer, intent));
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.dispatch_filters(FiltersIntent::SetSearchQuery(query.into()));
    }

    pub fn set_selected_category(&self, category: impl Into<String>) {
        self.dispatch_filters(FiltersIntent::SetSelectedCategory(category.into()));
    }

    pub fn set_sort_by(&self, sort_by: SortBy) {
        self.dispatch_filters(FiltersIntent::SetSortBy(sort_by));
    }

    pub fn reset_filters(&self) {
        self.dispatch_filters(FiltersIntent::Reset);
    }

    // -- Favorites ------------------------------------------------------------

    pub fn dispatch_favorites(&self, intent: FavoritesIntent) {
        self.update(|state| dispatch_mvi!(@changed state, favorites, FavoritesReducer, intent));
    }

    pub fn add_favorite(&self, product: Product) {
        self.dispatch_favorites(FavoritesIntent::Add(product));
    }

    pub fn remove_favorite(&self, id: ProductId) {
        self.dispatch_favorites(FavoritesIntent::Remove(id));
    }

    pub fn clear_favorites(&self) {
        self.dispatch_favorites(FavoritesIntent::Clear);
    }

    pub fn toggle_favorite(&self, product: Product) {
        self.dispatch_favorites(FavoritesIntent::Toggle(product));
    }

    // -- Internals ------------------------------------------------------------

    fn update(&self, f: impl FnOnce(&mut SessionState) -> bool) {
        let changed = {
            let mut guard = self.inner.state.lock();
            f(&mut guard)
        };
        if changed {
            self.notify();
        }
    }

    fn notify(&self) {
        self.inner.revision.send_modify(|revision| *revision += 1);
    }
}
