use stockroom_categories::{Category, CategoryRepository};
use stockroom_core::RepositoryResult;

use super::memory::InMemoryRepository;

pub type InMemoryCategoryRepository = InMemoryRepository<Category>;

impl InMemoryRepository<Category> {
    /// Category store with the unique-name constraint enforced at write time.
    pub fn categories() -> Self {
        Self::with_unique_key(|category| category.name().to_string())
    }
}

impl CategoryRepository for InMemoryRepository<Category> {
    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
        Ok(self.scan(|category| category.name() == name)?.into_iter().next())
    }

    fn exists_by_name(&self, name: &str) -> RepositoryResult<bool> {
        Ok(self.find_by_name(name)?.is_some())
    }
}
