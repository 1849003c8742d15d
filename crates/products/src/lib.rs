//! Products domain module.
//!
//! This crate contains the business rules for products: field validation, the
//! status state machine tied to stock level, and weighted-average costing on
//! restock. Pure synchronous logic over a [`ProductRepository`] collaborator
//! (no IO, no HTTP, no storage engine).

pub mod costing;
pub mod manager;
pub mod product;
pub mod repository;

pub use costing::{PROFIT_MARGIN, Restock, RestockOverflow, sale_price_for};
pub use manager::ProductManager;
pub use product::{Product, ProductDraft, ProductInput, ProductStatus};
pub use repository::ProductRepository;
