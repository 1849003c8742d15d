//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error taxonomy, typed identifiers, money, and the repository contract
//! the managers are written against.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, InvalidId, ProductId};
pub use repository::{Repository, RepositoryError, RepositoryResult};
pub use value_object::{Money, ValueObject, round_half_up};
