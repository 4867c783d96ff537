use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::super::constants;
use super::super::models::Product;
use super::super::repository::{LoadState, Repository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogState {
    Loading,
    Success(Arc<[Product]>),
    Error(String),
}

impl CatalogState {

    fn derive(state: LoadState, products: &Arc<[Product]>) -> Self {
        match state {
            LoadState::NotLoaded | LoadState::Loading => Self::Loading,
            LoadState::Loaded if products.is_empty() => Self::Error(constants::EMPTY_CATALOG_MESSAGE.to_string()),
            LoadState::Loaded => Self::Success(Arc::clone(products)),
        }
    }

}

/// Backs the product list screen.
pub struct Catalog {
    repository: Arc<Repository>,
    state: watch::Sender<CatalogState>,
    observer: JoinHandle<()>,
}

impl Catalog {

    /// Starts following the repository and requests the first load.
    /// Must be called from within a tokio runtime.
    pub fn new(repository: Arc<Repository>) -> Self {
        let (state, _) = watch::channel(CatalogState::Loading);
        let observer = Self::spawn_observer(&repository, state.clone());

        let this = Self { repository, state, observer };
        this.spawn_load();
        this
    }

    fn spawn_observer(repository: &Arc<Repository>, state: watch::Sender<CatalogState>) -> JoinHandle<()> {
        let repository = Arc::clone(repository);
        let mut products = repository.observe();

        tokio::spawn(async move {
            loop {
                products.borrow_and_update();
                let (load_state, current) = repository.snapshot();
                state.send_replace(CatalogState::derive(load_state, &current));
                if products.changed().await.is_err() {
                    break;
                }
            }
        })
    }

    fn spawn_load(&self) {
        let repository = Arc::clone(&self.repository);
        tokio::spawn(async move { repository.load_once().await });
    }

    pub fn state(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Shows `Loading` while asking the repository to load again, then shows
    /// whatever the repository holds. Once a load has completed the
    /// repository ignores the request, so the state comes straight back.
    pub async fn retry(&self) {
        self.state.send_replace(CatalogState::Loading);
        self.repository.load_once().await;

        let (load_state, products) = self.repository.snapshot();
        self.state.send_replace(CatalogState::derive(load_state, &products));
    }

}

impl Drop for Catalog {
    fn drop(&mut self) {
        self.observer.abort();
    }
}
