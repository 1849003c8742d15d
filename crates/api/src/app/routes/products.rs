use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};

use stockroom_core::ProductId;
use stockroom_products::ProductInput;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).delete(delete_product))
        .route("/:id/status", patch(change_status))
        .route("/:id/stock/increase", patch(increase_stock))
        .route("/:id/stock/decrease", patch(decrease_stock))
}

/// `?status=` takes precedence over `?max_stock=`; neither lists everything.
/// A blank `status` counts as absent.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::ListProductsQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(v) => v,
        Err(rejection) => return errors::query_rejection(rejection),
    };

    let status = query.status.as_deref().filter(|s| !s.trim().is_empty());
    let listed = match (status, query.max_stock) {
        (Some(status), _) => services.products.list_by_status(status),
        (None, Some(threshold)) => services.products.list_low_stock(threshold),
        (None, None) => services.products.list_all(),
    };

    match listed {
        Ok(products) => Json(dto::items(&products, dto::product_to_json)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection(rejection),
    };

    match services.products.create(input) {
        Ok(product) => (StatusCode::CREATED, Json(dto::product_to_json(&product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id: ProductId = match errors::parse_id(&id, "product") {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.products.get_by_id(id) {
        Ok(product) => Json(dto::product_to_json(&product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id: ProductId = match errors::parse_id(&id, "product") {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.products.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn change_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::ChangeStatusRequest>, JsonRejection>,
) -> Response {
    let id: ProductId = match errors::parse_id(&id, "product") {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection(rejection),
    };

    let result = dto::required(body.status, "status")
        .and_then(|status| services.products.change_status(id, &status));

    match result {
        Ok(product) => Json(dto::product_to_json(&product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn increase_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::IncreaseStockRequest>, JsonRejection>,
) -> Response {
    let id: ProductId = match errors::parse_id(&id, "product") {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection(rejection),
    };

    let result = dto::required(body.quantity, "quantity").and_then(|quantity| {
        let unit_cost = dto::required(body.unit_cost, "unit_cost")?;
        services.products.increase_stock(id, quantity, unit_cost)
    });

    match result {
        Ok(product) => Json(dto::product_to_json(&product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn decrease_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::DecreaseStockRequest>, JsonRejection>,
) -> Response {
    let id: ProductId = match errors::parse_id(&id, "product") {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection(rejection),
    };

    let result = dto::required(body.quantity, "quantity")
        .and_then(|quantity| services.products.decrease_stock(id, quantity));

    match result {
        Ok(product) => Json(dto::product_to_json(&product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
