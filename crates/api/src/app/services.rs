use std::sync::Arc;

use stockroom_categories::CategoryManager;
use stockroom_infra::repositories::{InMemoryCategoryRepository, InMemoryProductRepository};
use stockroom_products::ProductManager;

pub type Categories = CategoryManager<Arc<InMemoryCategoryRepository>>;
pub type Products = ProductManager<Arc<InMemoryProductRepository>>;

/// Managers shared by every handler.
pub struct AppServices {
    pub categories: Categories,
    pub products: Products,
}

impl AppServices {
    pub fn new(categories: Categories, products: Products) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        let categories = Arc::new(InMemoryCategoryRepository::categories());
        let products = Arc::new(InMemoryProductRepository::new());
        tracing::info!("using in-memory repositories");
        Self::new(CategoryManager::new(categories), ProductManager::new(products))
    }
}
