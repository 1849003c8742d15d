use axum::Router;

pub mod categories;
pub mod products;
pub mod system;

/// Router for every resource endpoint.
pub fn router() -> Router {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
}
