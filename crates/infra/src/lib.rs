//! Infrastructure layer: storage adapters behind the domain repository traits.

pub mod repositories;

pub use repositories::{
    InMemoryCategoryRepository, InMemoryProductRepository, InMemoryRepository,
};

#[cfg(test)]
mod integration_tests;
