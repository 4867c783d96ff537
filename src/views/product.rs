use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;

use super::super::constants;
use super::super::models;
use super::super::repository::Repository;

struct State {
    repository: Arc<Repository>,
    product_id: String,
    grace_period: Duration,
    product: watch::Sender<Option<models::Product>>,
    active: Mutex<bool>,
}

/// Backs the product detail screen for one product id.
///
/// The lookup only runs while someone is subscribed. After the last
/// subscriber leaves it keeps running for the grace period, so a screen that
/// is rebuilt quickly picks up where it left off.
#[derive(Clone)]
pub struct Product {
    state: Arc<State>,
}

impl Product {

    pub fn new(repository: Arc<Repository>, product_id: impl Into<String>) -> Self {
        Self::with_grace_period(repository, product_id, constants::DETAIL_GRACE_PERIOD)
    }

    pub fn with_grace_period(repository: Arc<Repository>, product_id: impl Into<String>, grace_period: Duration) -> Self {
        let (product, _) = watch::channel(None);
        let state = State {
            repository,
            product_id: product_id.into(),
            grace_period,
            product,
            active: Mutex::new(false),
        };
        Self { state: Arc::new(state) }
    }

    /// First product with a matching id, in list order.
    #[must_use]
    pub fn find(products: &[models::Product], product_id: &str) -> Option<models::Product> {
        products.iter().find(|product| product.id == product_id).cloned()
    }

    pub fn product_id(&self) -> &str {
        &self.state.product_id
    }

    pub fn current(&self) -> Option<models::Product> {
        self.state.product.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        *self.state.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Attaches a consumer, starting the lookup if it is not running.
    /// Must be called from within a tokio runtime.
    pub fn subscribe(&self) -> watch::Receiver<Option<models::Product>> {
        let mut active = self.state.active.lock().unwrap_or_else(PoisonError::into_inner);
        let receiver = self.state.product.subscribe();

        if !*active {
            *active = true;
            tracing::debug!(product_id = %self.state.product_id, "detail lookup started");
            tokio::spawn(Self::derive(Arc::clone(&self.state)));
        }

        receiver
    }

    async fn derive(state: Arc<State>) {
        let mut products = state.repository.observe();

        loop {
            let current = Self::find(&products.borrow_and_update(), &state.product_id);
            state.product.send_if_modified(|product| {
                if *product == current {
                    false
                } else {
                    *product = current;
                    true
                }
            });

            tokio::select! {
                changed = products.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                () = Self::idle(&state) => {
                    if Self::try_stop(&state) {
                        return;
                    }
                }
            }
        }

        *state.active.lock().unwrap_or_else(PoisonError::into_inner) = false;
    }

    /// Resolves once nobody has been subscribed for the whole grace period.
    async fn idle(state: &State) {
        state.product.closed().await;
        tokio::time::sleep(state.grace_period).await;
    }

    fn try_stop(state: &State) -> bool {
        let mut active = state.active.lock().unwrap_or_else(PoisonError::into_inner);
        if state.product.receiver_count() > 0 {
            return false;
        }

        *active = false;
        tracing::debug!(product_id = %state.product_id, "detail lookup stopped");
        true
    }

}
