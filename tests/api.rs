//! End-to-end checks against the fully assembled router.

use std::collections::HashSet;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use pizzeria_kernel::settings::Settings;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    pizzeria_http::build_router(&pizzeria_app::module_registry(), &Settings::default())
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn ann_lee() -> Value {
    json!({
        "firstName": "Ann",
        "lastName": "Lee",
        "address": {"street": "Main", "houseNumber": "5", "city": "Metropolis"},
        "phoneNumber": "555-1234",
        "pizzas": [{"ingredients": ["Sauce", "Cheese"], "price": 9.5}]
    })
}

async fn submit(app: &Router, order: &Value) -> String {
    let response = app
        .clone()
        .oneshot(post_json("/api/orders", order))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    String::from_utf8(body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn ingredients_are_listed_in_order() {
    let app = app();

    for _ in 0..3 {
        let response = app.clone().oneshot(get("/api/ingredients")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([
                {"name": "Sauce", "image": "images/sauce.png"},
                {"name": "Cheese", "image": "images/cheese.png"},
                {"name": "Corn", "image": "images/corn.png"},
                {"name": "Mushrooms", "image": "images/mushrooms.png"},
                {"name": "Peppers", "image": "images/peppers.png"},
                {"name": "Onions", "image": "images/onions.png"}
            ])
        );
    }
}

#[tokio::test]
async fn submitted_order_can_be_fetched_by_code() {
    let app = app();
    let code = submit(&app, &ann_lee()).await;
    assert!(!code.is_empty());

    let response = app
        .clone()
        .oneshot(get(&format!("/api/orders/{code}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let mut expected = ann_lee();
    expected["code"] = json!(code);
    assert_eq!(body_json(response).await, expected);
}

#[tokio::test]
async fn client_code_is_ignored() {
    let app = app();
    let mut order = ann_lee();
    order["code"] = json!("chosen-by-client");

    let code = submit(&app, &order).await;
    assert_ne!(code, "chosen-by-client");

    let response = app
        .oneshot(get("/api/orders/chosen-by-client"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn null_code_is_accepted_and_replaced() {
    let app = app();
    let mut order = ann_lee();
    order["code"] = Value::Null;

    let code = submit(&app, &order).await;
    assert!(!code.is_empty());

    let response = app
        .oneshot(get(&format!("/api/orders/{code}")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["code"], json!(code));
}

#[tokio::test]
async fn null_fields_are_stored_as_empty() {
    let app = app();
    let code = submit(
        &app,
        &json!({"firstName": null, "address": null, "pizzas": null}),
    )
    .await;

    let response = app
        .oneshot(get(&format!("/api/orders/{code}")))
        .await
        .unwrap();
    let stored = body_json(response).await;
    assert_eq!(stored["firstName"], "");
    assert_eq!(
        stored["address"],
        json!({"street": "", "houseNumber": "", "city": ""})
    );
    assert_eq!(stored["pizzas"], json!([]));
}

#[tokio::test]
async fn unknown_code_is_not_found() {
    let response = app()
        .oneshot(get("/api/orders/00000000-0000-4000-8000-000000000000"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_submissions_get_unique_codes() {
    let app = app();
    let handles: Vec<_> = (0..32)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { submit(&app, &ann_lee()).await })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap());
    }
    assert_eq!(codes.len(), 32);

    for code in codes {
        let response = app
            .clone()
            .oneshot(get(&format!("/api/orders/{code}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn malformed_order_is_client_error() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/orders")
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "bad_request");
}

#[tokio::test]
async fn openapi_lists_shop_endpoints() {
    let response = app().oneshot(get("/docs/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_json(response).await;
    let paths = doc["paths"].as_object().unwrap();
    for path in ["/api/ingredients", "/api/orders", "/api/orders/{code}"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
