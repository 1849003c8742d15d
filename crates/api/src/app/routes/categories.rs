use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use stockroom_categories::CategoryInput;
use stockroom_core::CategoryId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/by-name/:name", get(get_category_by_name))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

pub async fn list_categories(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.categories.list_all() {
        Ok(categories) => Json(dto::items(&categories, dto::category_to_json)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CategoryInput>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection(rejection),
    };

    match services.categories.create(input) {
        Ok(category) => (StatusCode::CREATED, Json(dto::category_to_json(&category))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id: CategoryId = match errors::parse_id(&id, "category") {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.categories.get_by_id(id) {
        Ok(category) => Json(dto::category_to_json(&category)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_category_by_name(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> Response {
    match services.categories.get_by_name(&name) {
        Ok(category) => Json(dto::category_to_json(&category)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<CategoryInput>, JsonRejection>,
) -> Response {
    let id: CategoryId = match errors::parse_id(&id, "category") {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Json(input) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection(rejection),
    };

    match services.categories.update(id, input) {
        Ok(category) => Json(dto::category_to_json(&category)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id: CategoryId = match errors::parse_id(&id, "category") {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.categories.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
