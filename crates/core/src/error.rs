//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant carries structured fields so the boundary layer can render a
/// response without parsing the message. `Display` output is for logs and
/// human-facing bodies only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller-supplied input failed a precondition.
    #[error("invalid field '{field}': {reason}")]
    Validation { field: &'static str, reason: String },

    /// The requested entity does not exist.
    #[error("{resource} '{identifier}' not found")]
    NotFound {
        resource: &'static str,
        identifier: String,
    },

    /// A uniqueness constraint was violated.
    #[error("a {resource} with value '{value}' already exists")]
    Duplicate { resource: &'static str, value: String },

    /// A status value outside the enumerated set was supplied.
    #[error("invalid status; valid values are: {}", valid_values.join(", "))]
    InvalidState { valid_values: &'static [&'static str] },

    /// A status change to the value already held was requested.
    #[error("cannot change status from '{current}' to '{requested}'")]
    InvalidStateTransition { current: String, requested: String },

    /// A stock decrease asked for more units than are available.
    #[error("insufficient stock (available: {available}, requested: {requested})")]
    InsufficientStock { available: u64, requested: u64 },

    /// The storage collaborator detected a concurrent modification.
    #[error("conflict: {resource} '{identifier}' was modified concurrently")]
    Conflict {
        resource: &'static str,
        identifier: String,
    },

    /// Opaque storage failure.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found(resource: &'static str, identifier: impl ToString) -> Self {
        Self::NotFound {
            resource,
            identifier: identifier.to_string(),
        }
    }

    pub fn duplicate(resource: &'static str, value: impl Into<String>) -> Self {
        Self::Duplicate {
            resource,
            value: value.into(),
        }
    }

    pub fn invalid_state(valid_values: &'static [&'static str]) -> Self {
        Self::InvalidState { valid_values }
    }

    pub fn invalid_transition(current: impl ToString, requested: impl ToString) -> Self {
        Self::InvalidStateTransition {
            current: current.to_string(),
            requested: requested.to_string(),
        }
    }

    pub fn insufficient_stock(available: u64, requested: u64) -> Self {
        Self::InsufficientStock {
            available,
            requested,
        }
    }

    /// Field name for validation failures, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
