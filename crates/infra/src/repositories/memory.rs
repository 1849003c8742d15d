use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use stockroom_core::{Entity, Repository, RepositoryError, RepositoryResult};

/// Extracts the value a unique constraint applies to.
pub type UniqueKey<T> = fn(&T) -> String;

#[derive(Debug)]
struct Row<T> {
    /// Insertion position; listings come back in this order.
    seq: u64,
    record: T,
}

#[derive(Debug)]
struct Table<T: Entity> {
    next_seq: u64,
    rows: HashMap<T::Id, Row<T>>,
}

/// In-memory repository for tests/dev.
///
/// Behaves like a versioned table: ids are UUIDv7 assigned on insert, every
/// accepted write bumps the record version, and an update or delete carrying a
/// stale version is rejected with [`RepositoryError::Conflict`]. All checks run
/// under the write lock, so each write is atomic per record.
#[derive(Debug)]
pub struct InMemoryRepository<T: Entity> {
    inner: RwLock<Table<T>>,
    unique_key: Option<UniqueKey<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table {
                next_seq: 0,
                rows: HashMap::new(),
            }),
            unique_key: None,
        }
    }

    /// Enforce uniqueness of `key(record)` across all stored records.
    pub fn with_unique_key(key: UniqueKey<T>) -> Self {
        Self {
            unique_key: Some(key),
            ..Self::new()
        }
    }

    /// Records matching `filter`, in insertion order.
    pub fn scan(&self, filter: impl Fn(&T) -> bool) -> RepositoryResult<Vec<T>> {
        let table = self.read()?;
        let mut rows: Vec<&Row<T>> = table.rows.values().filter(|row| filter(&row.record)).collect();
        rows.sort_by_key(|row| row.seq);
        Ok(rows.into_iter().map(|row| row.record.clone()).collect())
    }

    pub fn len(&self) -> RepositoryResult<usize> {
        Ok(self.read()?.rows.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Table<T>>> {
        self.inner
            .read()
            .map_err(|_| RepositoryError::Backend(format!("{} store lock poisoned", T::RESOURCE)))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Table<T>>> {
        self.inner
            .write()
            .map_err(|_| RepositoryError::Backend(format!("{} store lock poisoned", T::RESOURCE)))
    }

    fn ensure_unique(&self, table: &Table<T>, candidate: &T) -> RepositoryResult<()> {
        let Some(key) = self.unique_key else {
            return Ok(());
        };
        let value = key(candidate);
        let taken = table
            .rows
            .values()
            .any(|row| row.record.id() != candidate.id() && key(&row.record) == value);
        if taken {
            return Err(RepositoryError::UniqueViolation {
                resource: T::RESOURCE,
                value,
            });
        }
        Ok(())
    }

    /// Stored version of `record`, failing if it is missing or stale.
    fn current_version(table: &Table<T>, record: &T) -> RepositoryResult<(u64, u64)> {
        let row = table
            .rows
            .get(record.id())
            .ok_or_else(|| RepositoryError::Missing {
                resource: T::RESOURCE,
                identifier: record.id().to_string(),
            })?;

        let actual = row.record.version();
        if actual != record.version() {
            tracing::warn!(
                resource = T::RESOURCE,
                id = %record.id(),
                expected = record.version(),
                actual,
                "stale write rejected"
            );
            return Err(RepositoryError::Conflict {
                resource: T::RESOURCE,
                identifier: record.id().to_string(),
                expected: record.version(),
                actual,
            });
        }
        Ok((row.seq, actual))
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn find_by_id(&self, id: &T::Id) -> RepositoryResult<Option<T>> {
        Ok(self.read()?.rows.get(id).map(|row| row.record.clone()))
    }

    fn find_all(&self) -> RepositoryResult<Vec<T>> {
        self.scan(|_| true)
    }

    fn insert(&self, draft: T::Draft) -> RepositoryResult<T> {
        let mut table = self.write()?;

        let mut record = T::from_draft(T::Id::from(Uuid::now_v7()), draft);
        record.set_version(1);
        self.ensure_unique(&table, &record)?;

        let seq = table.next_seq;
        table.next_seq += 1;
        table.rows.insert(
            *record.id(),
            Row {
                seq,
                record: record.clone(),
            },
        );
        tracing::debug!(resource = T::RESOURCE, id = %record.id(), "record inserted");
        Ok(record)
    }

    fn update(&self, mut record: T) -> RepositoryResult<T> {
        let mut table = self.write()?;

        let (seq, actual) = Self::current_version(&table, &record)?;
        self.ensure_unique(&table, &record)?;

        record.set_version(actual + 1);
        table.rows.insert(
            *record.id(),
            Row {
                seq,
                record: record.clone(),
            },
        );
        Ok(record)
    }

    fn delete(&self, record: &T) -> RepositoryResult<()> {
        let mut table = self.write()?;

        Self::current_version(&table, record)?;
        table.rows.remove(record.id());
        tracing::debug!(resource = T::RESOURCE, id = %record.id(), "record deleted");
        Ok(())
    }
}
