//! Repository implementations for the domain crates.

pub mod categories;
pub mod memory;
pub mod products;

pub use categories::InMemoryCategoryRepository;
pub use memory::{InMemoryRepository, UniqueKey};
pub use products::InMemoryProductRepository;
