use reqwest::StatusCode;
use serde_json::{json, Value};

use stockroom_api::app::{build_app, services::AppServices};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app(AppServices::in_memory());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_product(client: &reqwest::Client, srv: &TestServer, body: Value) -> Value {
    let res = client
        .post(srv.url("/products"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn category_lifecycle_create_rename_delete() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/categories"))
        .json(&json!({ "name": "  Beverages ", "description": "Drinks" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Beverages");
    assert_eq!(created["version"], 1);

    let res = client
        .get(srv.url("/categories/by-name/Beverages"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let found: Value = res.json().await.unwrap();
    assert_eq!(found["id"], created["id"]);

    let res = client
        .put(srv.url(&format!("/categories/{id}")))
        .json(&json!({ "name": "Drinks" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let renamed: Value = res.json().await.unwrap();
    assert_eq!(renamed["name"], "Drinks");
    assert_eq!(renamed["version"], 2);

    let listed: Value = client
        .get(srv.url("/categories"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed["items"].as_array().unwrap().len(), 1);

    let res = client
        .delete(srv.url(&format!("/categories/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(srv.url(&format!("/categories/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn duplicate_category_name_is_conflict() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for (name, expected) in [("Snacks", StatusCode::CREATED), (" Snacks ", StatusCode::CONFLICT)] {
        let res = client
            .post(srv.url("/categories"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), expected);
        if expected == StatusCode::CONFLICT {
            let body: Value = res.json().await.unwrap();
            assert_eq!(body["error"], "duplicate_resource");
            assert_eq!(body["details"]["value"], "Snacks");
        }
    }
}

#[tokio::test]
async fn missing_category_name_is_validation_error() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/categories"))
        .json(&json!({ "description": "no name" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"]["field"], "name");
}

#[tokio::test]
async fn restock_recomputes_cost_and_price() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(
        &client,
        &srv,
        json!({
            "name": "Coffee",
            "sale_price": "5.00",
            "purchase_cost": "4.00",
            "stock_quantity": 10,
        }),
    )
    .await;
    assert_eq!(created["status"], "Active");
    let id = created["id"].as_str().unwrap().to_string();

    let res = client
        .patch(srv.url(&format!("/products/{id}/stock/increase")))
        .json(&json!({ "quantity": 10, "unit_cost": "6.00" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let restocked: Value = res.json().await.unwrap();
    assert_eq!(restocked["stock_quantity"], 20);
    assert_eq!(restocked["purchase_cost"], "5.00");
    assert_eq!(restocked["sale_price"], "6.25");
    assert_eq!(restocked["status"], "Active");
}

#[tokio::test]
async fn decrease_beyond_stock_is_rejected_and_leaves_product_unchanged() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(
        &client,
        &srv,
        json!({ "name": "Tea", "sale_price": "3.00", "stock_quantity": 5 }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let res = client
        .patch(srv.url(&format!("/products/{id}/stock/decrease")))
        .json(&json!({ "quantity": 6 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "insufficient_stock");
    assert_eq!(body["details"]["available"], 5);
    assert_eq!(body["details"]["requested"], 6);

    let res = client
        .patch(srv.url(&format!("/products/{id}/stock/decrease")))
        .json(&json!({ "quantity": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let drained: Value = res.json().await.unwrap();
    assert_eq!(drained["stock_quantity"], 0);
    assert_eq!(drained["status"], "Depleted");
}

#[tokio::test]
async fn status_changes_reject_no_ops_and_unknown_values() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(
        &client,
        &srv,
        json!({ "name": "Milk", "sale_price": "1.20", "stock_quantity": 8 }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    let status_url = srv.url(&format!("/products/{id}/status"));

    let res = client
        .patch(&status_url)
        .json(&json!({ "status": "Active" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_state_transition");

    let res = client
        .patch(&status_url)
        .json(&json!({ "status": "Archived" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_state");
    assert_eq!(
        body["details"]["valid_values"],
        json!(["Active", "Inactive", "Depleted"])
    );

    let res = client.patch(&status_url).json(&json!({})).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["details"]["field"], "status");

    let res = client
        .patch(&status_url)
        .json(&json!({ "status": "Depleted" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let depleted: Value = res.json().await.unwrap();
    assert_eq!(depleted["stock_quantity"], 0);
}

#[tokio::test]
async fn product_listing_filters_by_status_then_stock() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for (name, stock) in [("empty", 0), ("few", 4), ("edge", 5), ("plenty", 50)] {
        create_product(
            &client,
            &srv,
            json!({ "name": name, "sale_price": "1.00", "stock_quantity": stock }),
        )
        .await;
    }

    let names = |body: Value| -> Vec<String> {
        body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect()
    };

    let low: Value = client
        .get(srv.url("/products?max_stock=5"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(names(low), vec!["empty", "few"]);

    let depleted: Value = client
        .get(srv.url("/products?status=Depleted&max_stock=100"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(names(depleted), vec!["empty"]);

    let blank_status: Value = client
        .get(srv.url("/products?status=&max_stock=5"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(names(blank_status), vec!["empty", "few"]);

    let res = client.get(srv.url("/products?status=%20")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let blank_only: Value = res.json().await.unwrap();
    assert_eq!(names(blank_only).len(), 4);

    let all: Value = client
        .get(srv.url("/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(names(all).len(), 4);
}

#[tokio::test]
async fn malformed_and_unknown_ids() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/products/not-a-uuid")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");

    let res = client
        .get(srv.url("/products/00000000-0000-7000-8000-000000000000"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
