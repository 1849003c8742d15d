//! Entity trait: identity + continuity across state changes.

use core::fmt::{Debug, Display};
use core::hash::Hash;

use uuid::Uuid;

/// A persisted domain record.
///
/// Identity is assigned by the storage collaborator when the record's draft is
/// first inserted. The version counter is likewise owned by storage: domain
/// code reads records, mutates business fields and hands them back without
/// touching `version`.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Hash + Debug + Display + From<Uuid> + Send + Sync + 'static;

    /// Unsaved form of the record (everything except id and version).
    type Draft: Send;

    /// Resource name used in errors and logs (e.g. `"category"`).
    const RESOURCE: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Storage revision of this copy of the record.
    fn version(&self) -> u64;

    /// Build the stored record for a freshly assigned id.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Stamp the storage revision. Only repositories call this.
    fn set_version(&mut self, version: u64);
}
