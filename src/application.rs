use std::io::Write;

use super::prelude::*;
use super::populator::Populator;
use super::repository::Repository;
use super::source::CatalogSource;
use super::views::{CatalogState, CatalogView, ProductView};

struct ApplicationState {
    repository: Arc<Repository>,
}

/// Composition root: owns the one repository and hands out views over it.
#[derive(Clone)]
pub struct Application {
    state: Arc<ApplicationState>,
}

impl Application {

    #[must_use]
    pub fn new() -> Self {
        Self::from_repository(Repository::bundled())
    }

    pub fn with_source(source: Arc<dyn CatalogSource>) -> Self {
        Self::from_repository(Repository::new(source))
    }

    fn from_repository(repository: Repository) -> Self {
        let state = ApplicationState { repository: Arc::new(repository) };
        Self { state: Arc::new(state) }
    }

    pub fn repository(&self) -> &Arc<Repository> {
        &self.state.repository
    }

    pub fn catalog_view(&self) -> CatalogView {
        CatalogView::new(Arc::clone(&self.state.repository))
    }

    pub fn product_view(&self, product_id: impl Into<String>) -> ProductView {
        ProductView::new(Arc::clone(&self.state.repository), product_id)
    }

    /// Loads the catalog, then writes the list and the first product's
    /// details.
    pub async fn activate(&self, out: &mut impl Write) -> Result<()> {
        let view = self.catalog_view();
        let mut receiver = view.state();
        let state = receiver
            .wait_for(|state| !matches!(state, CatalogState::Loading))
            .await
            .context("Catalog view closed before the catalog loaded")?
            .clone();

        Populator::populate_catalog(out, &state)?;

        let CatalogState::Success(products) = state else {
            return Ok(());
        };
        let Some(first) = products.first() else {
            return Ok(());
        };

        let detail = self.product_view(first.id.clone());
        let mut receiver = detail.subscribe();
        let product = receiver
            .wait_for(Option::is_some)
            .await
            .context("Product view closed before the lookup finished")?
            .clone();

        writeln!(out)?;
        Populator::populate_product(out, product.as_ref())
    }

}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
