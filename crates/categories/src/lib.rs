//! Product category domain module.
//!
//! Business rules for categories (name presence and uniqueness), written as
//! synchronous logic over a [`CategoryRepository`] collaborator. No HTTP, no
//! storage engine.

pub mod category;
pub mod manager;
pub mod repository;

pub use category::{Category, CategoryDraft, CategoryInput};
pub use manager::CategoryManager;
pub use repository::CategoryRepository;
