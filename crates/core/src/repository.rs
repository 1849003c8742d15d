//! Storage collaborator contract shared by every entity.

use std::sync::Arc;

use thiserror::Error;

use crate::entity::Entity;
use crate::error::DomainError;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage-level failure.
///
/// These are infrastructure errors as opposed to domain errors; they convert
/// into [`DomainError`] so managers can propagate them with `?`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Optimistic concurrency check failed (stale record version).
    #[error("{resource} '{identifier}' version conflict (expected: {expected}, actual: {actual})")]
    Conflict {
        resource: &'static str,
        identifier: String,
        expected: u64,
        actual: u64,
    },

    /// A storage-level uniqueness constraint rejected the write.
    #[error("{resource} with value '{value}' violates a unique constraint")]
    UniqueViolation { resource: &'static str, value: String },

    /// An update or delete targeted a record that is not stored.
    #[error("{resource} '{identifier}' is not stored")]
    Missing {
        resource: &'static str,
        identifier: String,
    },

    /// Backend failure (lock poisoning, connection loss, ...).
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict {
                resource,
                identifier,
                ..
            } => DomainError::Conflict {
                resource,
                identifier,
            },
            RepositoryError::UniqueViolation { resource, value } => {
                DomainError::Duplicate { resource, value }
            }
            RepositoryError::Missing {
                resource,
                identifier,
            } => DomainError::NotFound {
                resource,
                identifier,
            },
            RepositoryError::Backend(msg) => DomainError::Storage(msg),
        }
    }
}

/// Generic repository over one entity type.
///
/// - `insert` assigns the id and the initial version (the "first save").
/// - `update` overwrites the record with the same id, provided the caller's
///   copy carries the currently stored version; the stored version then
///   advances by one.
/// - `delete` removes the record under the same version rule.
///
/// Implementations must make `insert`, `update` and `delete` atomic per record.
pub trait Repository<T: Entity>: Send + Sync {
    fn find_by_id(&self, id: &T::Id) -> RepositoryResult<Option<T>>;
    fn find_all(&self) -> RepositoryResult<Vec<T>>;
    fn insert(&self, draft: T::Draft) -> RepositoryResult<T>;
    fn update(&self, record: T) -> RepositoryResult<T>;
    fn delete(&self, record: &T) -> RepositoryResult<()>;
}

impl<T, S> Repository<T> for Arc<S>
where
    T: Entity,
    S: Repository<T> + ?Sized,
{
    fn find_by_id(&self, id: &T::Id) -> RepositoryResult<Option<T>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepositoryResult<Vec<T>> {
        (**self).find_all()
    }

    fn insert(&self, draft: T::Draft) -> RepositoryResult<T> {
        (**self).insert(draft)
    }

    fn update(&self, record: T) -> RepositoryResult<T> {
        (**self).update(record)
    }

    fn delete(&self, record: &T) -> RepositoryResult<()> {
        (**self).delete(record)
    }
}
