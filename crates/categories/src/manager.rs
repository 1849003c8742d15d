use stockroom_core::{CategoryId, DomainError, DomainResult, Entity};

use crate::category::{Category, CategoryDraft, CategoryInput};
use crate::repository::CategoryRepository;

/// Category use cases over an injected repository.
///
/// Stateless apart from the repository handle, so one instance can serve any
/// number of concurrent callers.
#[derive(Debug, Clone)]
pub struct CategoryManager<R> {
    repository: R,
}

impl<R> CategoryManager<R>
where
    R: CategoryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn create(&self, input: CategoryInput) -> DomainResult<Category> {
        let name = required_name(input.name.as_deref())?;

        if self.repository.exists_by_name(&name)? {
            tracing::debug!(name = %name, "category create rejected: duplicate name");
            return Err(DomainError::duplicate(Category::RESOURCE, name));
        }

        let category = self.repository.insert(CategoryDraft {
            name,
            description: input.description,
        })?;
        tracing::info!(category_id = %category.id(), name = %category.name(), "category created");
        Ok(category)
    }

    pub fn get_by_id(&self, id: CategoryId) -> DomainResult<Category> {
        self.repository
            .find_by_id(&id)?
            .ok_or_else(|| DomainError::not_found(Category::RESOURCE, id))
    }

    pub fn get_by_name(&self, name: &str) -> DomainResult<Category> {
        let name = name.trim();
        self.repository
            .find_by_name(name)?
            .ok_or_else(|| DomainError::not_found(Category::RESOURCE, name))
    }

    /// All categories, in whatever order storage returns them.
    pub fn list_all(&self) -> DomainResult<Vec<Category>> {
        Ok(self.repository.find_all()?)
    }

    pub fn update(&self, id: CategoryId, input: CategoryInput) -> DomainResult<Category> {
        let mut category = self.get_by_id(id)?;
        let name = required_name(input.name.as_deref())?;

        if category.name != name && self.repository.exists_by_name(&name)? {
            tracing::debug!(category_id = %id, name = %name, "category update rejected: duplicate name");
            return Err(DomainError::duplicate(Category::RESOURCE, name));
        }

        category.name = name;
        category.description = input.description;

        let category = self.repository.update(category)?;
        tracing::info!(category_id = %id, "category updated");
        Ok(category)
    }

    pub fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let category = self.get_by_id(id)?;
        self.repository.delete(&category)?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(())
    }
}

fn required_name(name: Option<&str>) -> DomainResult<String> {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(DomainError::validation("name", "is required")),
    }
}
