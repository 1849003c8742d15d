use std::sync::Arc;

use stockroom_core::{Repository, RepositoryResult};

use crate::product::{Product, ProductStatus};

/// Product storage: the generic repository plus the filtered listings.
pub trait ProductRepository: Repository<Product> {
    fn find_by_status(&self, status: ProductStatus) -> RepositoryResult<Vec<Product>>;

    /// Products whose stock quantity is strictly below `threshold`.
    fn find_with_stock_below(&self, threshold: u64) -> RepositoryResult<Vec<Product>>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn find_by_status(&self, status: ProductStatus) -> RepositoryResult<Vec<Product>> {
        (**self).find_by_status(status)
    }

    fn find_with_stock_below(&self, threshold: u64) -> RepositoryResult<Vec<Product>> {
        (**self).find_with_stock_below(threshold)
    }
}
