use stockroom_core::RepositoryResult;
use stockroom_products::{Product, ProductRepository, ProductStatus};

use super::memory::InMemoryRepository;

pub type InMemoryProductRepository = InMemoryRepository<Product>;

impl ProductRepository for InMemoryRepository<Product> {
    fn find_by_status(&self, status: ProductStatus) -> RepositoryResult<Vec<Product>> {
        self.scan(|product| product.status() == status)
    }

    fn find_with_stock_below(&self, threshold: u64) -> RepositoryResult<Vec<Product>> {
        self.scan(|product| u64::from(product.stock_quantity()) < threshold)
    }
}
