//! Integration tests for managers running on the in-memory repositories.
//!
//! Verifies:
//! - Manager operations persist through the versioned store
//! - Storage-level constraints (unique names, stale versions) surface as domain errors
//! - Concurrent writers to one product never lose updates

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use stockroom_categories::{CategoryInput, CategoryManager, CategoryDraft};
use stockroom_core::{DomainError, Entity, Repository, RepositoryError};
use stockroom_products::{ProductInput, ProductManager, ProductStatus};

use crate::repositories::{InMemoryCategoryRepository, InMemoryProductRepository};

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn product_setup() -> (
    Arc<InMemoryProductRepository>,
    ProductManager<Arc<InMemoryProductRepository>>,
) {
    let repository = Arc::new(InMemoryProductRepository::new());
    let manager = ProductManager::new(repository.clone());
    (repository, manager)
}

#[test]
fn records_start_at_version_one_and_advance_per_write() {
    let (_repository, manager) = product_setup();
    let product = manager
        .create(ProductInput::new("Rice", d("2.00"), 10))
        .unwrap();
    assert_eq!(product.version(), 1);

    let product = manager.decrease_stock(*product.id(), 1).unwrap();
    assert_eq!(product.version(), 2);

    let product = manager.increase_stock(*product.id(), 1, d("1.00")).unwrap();
    assert_eq!(product.version(), 3);
}

#[test]
fn stale_update_is_rejected_as_conflict() {
    let (repository, manager) = product_setup();
    let product = manager
        .create(ProductInput::new("Rice", d("2.00"), 10))
        .unwrap();
    let stale = product.clone();

    manager.decrease_stock(*product.id(), 3).unwrap();

    let err = repository.update(stale.clone()).unwrap_err();
    assert_eq!(
        err,
        RepositoryError::Conflict {
            resource: "product",
            identifier: product.id().to_string(),
            expected: 1,
            actual: 2,
        }
    );
    assert_eq!(
        DomainError::from(err),
        DomainError::Conflict {
            resource: "product",
            identifier: product.id().to_string(),
        }
    );

    let err = repository.delete(&stale).unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict { .. }));
    assert_eq!(manager.get_by_id(*product.id()).unwrap().stock_quantity(), 7);
}

#[test]
fn listings_follow_insertion_order() {
    let (_repository, manager) = product_setup();
    for name in ["a", "b", "c", "d"] {
        manager
            .create(ProductInput::new(name, d("1.00"), 1))
            .unwrap();
    }

    let names: Vec<String> = manager
        .list_all()
        .unwrap()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[test]
fn updates_keep_listing_position() {
    let (_repository, manager) = product_setup();
    let first = manager.create(ProductInput::new("first", d("1.00"), 1)).unwrap();
    manager.create(ProductInput::new("second", d("1.00"), 1)).unwrap();

    manager.change_status(*first.id(), "Inactive").unwrap();

    let listed = manager.list_all().unwrap();
    assert_eq!(listed[0].name(), "first");
    assert_eq!(listed[0].status(), ProductStatus::Inactive);
}

#[test]
fn status_and_stock_filters_run_against_the_store() {
    let (_repository, manager) = product_setup();
    manager.create(ProductInput::new("empty", d("1.00"), 0)).unwrap();
    manager.create(ProductInput::new("few", d("1.00"), 4)).unwrap();
    manager.create(ProductInput::new("edge", d("1.00"), 5)).unwrap();

    let depleted = manager.list_by_status("Depleted").unwrap();
    assert_eq!(depleted.len(), 1);
    assert_eq!(depleted[0].name(), "empty");

    let low: Vec<String> = manager
        .list_low_stock(5)
        .unwrap()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(low, vec!["empty", "few"]);
}

#[test]
fn category_store_enforces_unique_names() {
    let repository = InMemoryCategoryRepository::categories();
    repository
        .insert(CategoryDraft {
            name: "Tools".into(),
            description: None,
        })
        .unwrap();

    let err = repository
        .insert(CategoryDraft {
            name: "Tools".into(),
            description: Some("again".into()),
        })
        .unwrap_err();
    assert_eq!(
        err,
        RepositoryError::UniqueViolation {
            resource: "category",
            value: "Tools".into(),
        }
    );
    assert_eq!(repository.len().unwrap(), 1);
}

#[test]
fn category_lifecycle_through_manager() {
    let repository = Arc::new(InMemoryCategoryRepository::categories());
    let manager = CategoryManager::new(repository.clone());

    let created = manager
        .create(CategoryInput::new(" Garden ").with_description("Outdoor"))
        .unwrap();
    assert_eq!(manager.get_by_name("Garden").unwrap(), created);

    let renamed = manager
        .update(*created.id(), CategoryInput::new("Outdoor"))
        .unwrap();
    assert_eq!(renamed.name(), "Outdoor");
    assert!(manager.get_by_name("Garden").is_err());

    manager.delete(*created.id()).unwrap();
    assert!(repository.is_empty().unwrap());
}

#[test]
fn concurrent_decreases_never_lose_updates() {
    let (_repository, manager) = product_setup();
    let manager = Arc::new(manager);
    let product = manager
        .create(ProductInput::new("Oil", d("3.00"), 200))
        .unwrap();
    let id = *product.id();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = manager.clone();
            std::thread::spawn(move || {
                let mut applied = 0u32;
                for _ in 0..10 {
                    match manager.decrease_stock(id, 1) {
                        Ok(_) => applied += 1,
                        Err(DomainError::Conflict { .. }) => {}
                        Err(other) => panic!("unexpected error: {other:?}"),
                    }
                }
                applied
            })
        })
        .collect();

    let applied: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
    let stored = manager.get_by_id(id).unwrap();
    assert_eq!(stored.stock_quantity(), 200 - applied);
    assert_eq!(stored.version(), 1 + u64::from(applied));
}
