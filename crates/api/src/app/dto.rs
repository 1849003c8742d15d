use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use stockroom_categories::Category;
use stockroom_core::{DomainError, Entity};
use stockroom_products::Product;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IncreaseStockRequest {
    pub quantity: Option<i64>,
    pub unit_cost: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct DecreaseStockRequest {
    pub quantity: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub status: Option<String>,
    pub max_stock: Option<i64>,
}

/// Unwrap a body field the operation cannot run without.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::validation(field, "is required"))
}

// -------------------------
// Response mapping
// -------------------------

pub fn category_to_json(category: &Category) -> Value {
    json!({
        "id": category.id().to_string(),
        "name": category.name(),
        "description": category.description(),
        "version": category.version(),
    })
}

pub fn product_to_json(product: &Product) -> Value {
    json!({
        "id": product.id().to_string(),
        "name": product.name(),
        "description": product.description(),
        "sale_price": product.sale_price(),
        "purchase_cost": product.purchase_cost(),
        "stock_quantity": product.stock_quantity(),
        "status": product.status().as_str(),
        "version": product.version(),
    })
}

pub fn items<T>(records: &[T], to_json: fn(&T) -> Value) -> Value {
    json!({ "items": records.iter().map(to_json).collect::<Vec<_>>() })
}
