use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{watch, OnceCell};

use super::loader::Loader;
use super::models::Product;
use super::source::{BundledCatalog, CatalogSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
}

/// Single source of truth for the flattened product list.
///
/// One instance is built by the application and shared behind an `Arc`.
/// The list is loaded at most once per instance; subscribers always see the
/// latest published list first.
pub struct Repository {
    source: Arc<dyn CatalogSource>,
    products: watch::Sender<Arc<[Product]>>,
    state: Mutex<LoadState>,
    loaded: OnceCell<()>,
}

impl Repository {

    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (products, _) = watch::channel(Arc::from(Vec::<Product>::new()));
        Self {
            source,
            products,
            state: Mutex::new(LoadState::NotLoaded),
            loaded: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn bundled() -> Self {
        Self::new(Arc::new(BundledCatalog::new()))
    }

    pub fn observe(&self) -> watch::Receiver<Arc<[Product]>> {
        self.products.subscribe()
    }

    pub fn products(&self) -> Arc<[Product]> {
        self.products.borrow().clone()
    }

    /// Load state and list read together, so a reader never pairs
    /// `Loaded` with the list from before the publish.
    pub fn snapshot(&self) -> (LoadState, Arc<[Product]>) {
        let products = self.products.borrow();
        (self.state(), products.clone())
    }

    pub fn state(&self) -> LoadState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, state: LoadState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Loads the catalog the first time it is called. Every later call returns
    /// immediately, whatever the first load produced. Callers racing the first
    /// load wait for it instead of parsing again.
    pub async fn load_once(&self) {
        self.loaded.get_or_init(|| self.load()).await;
    }

    async fn load(&self) {
        self.set_state(LoadState::Loading);

        let source = Arc::clone(&self.source);
        let products = match tokio::task::spawn_blocking(move || Loader::load(source.as_ref())).await {
            Ok(products) => products,
            Err(error) => {
                tracing::error!(error = %error, "catalog load task failed");
                Vec::new()
            }
        };

        tracing::info!(count = products.len(), "publishing catalog");
        let products: Arc<[Product]> = Arc::from(products);
        self.products.send_modify(|current| {
            self.set_state(LoadState::Loaded);
            *current = products;
        });
    }

}
