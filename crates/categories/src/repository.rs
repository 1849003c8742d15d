use std::sync::Arc;

use stockroom_core::{Repository, RepositoryResult};

use crate::category::Category;

/// Category storage: the generic repository plus lookups on the unique name.
pub trait CategoryRepository: Repository<Category> {
    /// Exact (case-sensitive) match on the stored name.
    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;

    fn exists_by_name(&self, name: &str) -> RepositoryResult<bool>;
}

impl<S> CategoryRepository for Arc<S>
where
    S: CategoryRepository + ?Sized,
{
    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
        (**self).find_by_name(name)
    }

    fn exists_by_name(&self, name: &str) -> RepositoryResult<bool> {
        (**self).exists_by_name(name)
    }
}
