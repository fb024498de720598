#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use carhub_cars::server::router::cars_router;
use carhub_kernel::domain::config::ApiConfig;
use carhub_kernel::server::state::ApiState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let config = ApiConfig::default();
    let state = ApiState::builder()
        .config(config.clone())
        .register_slice(carhub_cars::init(&config).expect("cars slice"))
        .build()
        .expect("state");
    let (router, _api) = cars_router().with_state(state).split_for_parts();
    router
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8"))
}

fn person(id: i64) -> Value {
    json!({ "id": id, "name": "Moshe", "birthDate": "2000-10-10", "email": "moshe@gmail.com" })
}

fn parsed(body: &str) -> Value {
    serde_json::from_str(body).expect("json body")
}

#[tokio::test]
async fn add_car_echoes_and_rejects_duplicates() {
    let app = app();
    let car = json!({ "number": "123-45-678", "model": "model1" });

    let (status, body) = send(&app, Method::POST, "/cars", Some(car.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parsed(&body), car);

    let (status, body) = send(&app, Method::POST, "/cars", Some(car)).await;
    assert_eq!(status, StatusCode::ALREADY_REPORTED);
    assert_eq!(body, "Car already exists");
}

#[tokio::test]
async fn invalid_fields_are_reported_together() {
    let app = app();

    let car = json!({ "number": "1-2-3", "model": "" });
    let (status, body) = send(&app, Method::POST, "/cars", Some(car)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Incorrect car number;Missing car model");

    let bad = json!({ "id": 0, "name": "Moshe", "birthDate": "2000-10-10", "email": "moshe" });
    let (status, body) = send(&app, Method::POST, "/cars/person", Some(bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Person id must be greater than or equal to 1;Incorrect email address");
}

#[tokio::test]
async fn malformed_or_unknown_json_is_bad_request() {
    let app = app();

    let extra = json!({ "number": "123-45-678", "model": "model1", "color": "red" });
    let (status, _) = send(&app, Method::POST, "/cars", Some(extra)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = Request::post("/cars")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn person_lifecycle() {
    let app = app();

    let (status, body) = send(&app, Method::PUT, "/cars/person", Some(person(123))).await;
    assert_eq!((status, body.as_str()), (StatusCode::NOT_FOUND, "Person not found"));

    let (status, _) = send(&app, Method::POST, "/cars/person", Some(person(123))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::POST, "/cars/person", Some(person(123))).await;
    assert_eq!(status, StatusCode::ALREADY_REPORTED);

    let mut updated = person(123);
    updated["email"] = json!("new@gmail.com");
    let (status, body) = send(&app, Method::PUT, "/cars/person", Some(updated.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parsed(&body), updated);

    let (status, body) = send(&app, Method::GET, "/cars/person/123", None).await;
    assert_eq!((status, parsed(&body)), (StatusCode::OK, json!([])));

    let (status, body) = send(&app, Method::DELETE, "/cars/person/123", None).await;
    assert_eq!((status, parsed(&body)), (StatusCode::OK, updated));

    let (status, _) = send(&app, Method::GET, "/cars/person/123", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_path_parameters_are_validated() {
    let app = app();

    let (status, body) = send(&app, Method::DELETE, "/cars/person/0", None).await;
    assert_eq!((status, body.as_str()), (StatusCode::BAD_REQUEST, "Person id must be greater than or equal to 1"));

    let (status, _) = send(&app, Method::DELETE, "/cars/person/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::DELETE, "/cars/12345", None).await;
    assert_eq!((status, body.as_str()), (StatusCode::BAD_REQUEST, "Incorrect car number"));

    let (status, body) = send(&app, Method::DELETE, "/cars/123-45-678", None).await;
    assert_eq!((status, body.as_str()), (StatusCode::NOT_FOUND, "Car not found"));
}

#[tokio::test]
async fn trade_moves_ownership_and_ranks_models() {
    let app = app();
    send(&app, Method::POST, "/cars/person", Some(person(123))).await;
    send(&app, Method::POST, "/cars/person", Some(person(124))).await;
    send(&app, Method::POST, "/cars", Some(json!({ "number": "123-45-678", "model": "model1" }))).await;
    send(&app, Method::POST, "/cars", Some(json!({ "number": "12-345-67", "model": "model2" }))).await;

    let (status, body) = send(&app, Method::GET, "/cars/123-45-678", None).await;
    assert_eq!((status, parsed(&body)), (StatusCode::OK, Value::Null));

    let deal = json!({ "carNumber": "123-45-678", "personId": 123, "date": "2024-01-15" });
    let (status, body) = send(&app, Method::PUT, "/cars/trade", Some(deal.clone())).await;
    assert_eq!((status, parsed(&body)), (StatusCode::OK, deal.clone()));

    let (status, body) = send(&app, Method::PUT, "/cars/trade", Some(deal)).await;
    assert_eq!((status, body.as_str()), (StatusCode::ALREADY_REPORTED, "Deal illegal state"));

    let (_, body) = send(&app, Method::GET, "/cars/123-45-678", None).await;
    assert_eq!(parsed(&body)["id"], 123);

    let deal = json!({ "carNumber": "123-45-678", "personId": 124 });
    let (status, _) = send(&app, Method::PUT, "/cars/trade", Some(deal)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/cars/person/124", None).await;
    assert_eq!(parsed(&body), json!([{ "number": "123-45-678", "model": "model1" }]));

    let (_, body) = send(&app, Method::GET, "/cars/models/popular", None).await;
    assert_eq!(parsed(&body), json!(["model1"]));

    let unknown = json!({ "carNumber": "12-345-67", "personId": 999 });
    let (status, body) = send(&app, Method::PUT, "/cars/trade", Some(unknown)).await;
    assert_eq!((status, body.as_str()), (StatusCode::NOT_FOUND, "Person not found"));
}

#[tokio::test]
async fn missing_slice_is_internal_error() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state");
    let (app, _api) = cars_router().with_state(state).split_for_parts();

    let (status, body) = send(&app, Method::GET, "/cars/models/popular", None).await;
    assert_eq!((status, body.as_str()), (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"));
}

#[tokio::test]
async fn type_level_failures_use_violation_messages() {
    let app = app();

    let negative = json!({ "id": -5, "name": "Moshe", "birthDate": "2000-10-10", "email": "moshe@gmail.com" });
    let (status, body) = send(&app, Method::POST, "/cars/person", Some(negative)).await;
    assert_eq!((status, body.as_str()), (StatusCode::BAD_REQUEST, "Person id must be greater than or equal to 1"));

    let (status, body) = send(&app, Method::DELETE, "/cars/person/-1", None).await;
    assert_eq!((status, body.as_str()), (StatusCode::BAD_REQUEST, "Person id must be greater than or equal to 1"));

    let (status, body) = send(&app, Method::POST, "/cars", Some(json!({ "number": null, "model": "x" }))).await;
    assert_eq!((status, body.as_str()), (StatusCode::BAD_REQUEST, "Missing car number"));

    let (status, body) = send(&app, Method::POST, "/cars", Some(json!({ "model": "x" }))).await;
    assert_eq!((status, body.as_str()), (StatusCode::BAD_REQUEST, "Missing car number"));

    let (status, body) = send(&app, Method::PUT, "/cars/trade", Some(json!({ "personId": -2 }))).await;
    assert_eq!(
        (status, body.as_str()),
        (StatusCode::BAD_REQUEST, "Missing car number;Person id must be greater than or equal to 1")
    );
}

#[tokio::test]
async fn unknown_keys_are_not_found() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/cars/123-45-678", None).await;
    assert_eq!((status, body.as_str()), (StatusCode::NOT_FOUND, "Car not found"));

    let (status, body) = send(&app, Method::DELETE, "/cars/person/777", None).await;
    assert_eq!((status, body.as_str()), (StatusCode::NOT_FOUND, "Person not found"));

    send(&app, Method::POST, "/cars/person", Some(person(123))).await;
    let deal = json!({ "carNumber": "123-45-678", "personId": 123 });
    let (status, body) = send(&app, Method::PUT, "/cars/trade", Some(deal)).await;
    assert_eq!((status, body.as_str()), (StatusCode::NOT_FOUND, "Car not found"));
}

#[tokio::test]
async fn deleting_owned_car_removes_it_from_owner() {
    let app = app();
    let car = json!({ "number": "123-45-678", "model": "model1" });
    send(&app, Method::POST, "/cars/person", Some(person(123))).await;
    send(&app, Method::POST, "/cars", Some(car.clone())).await;
    let deal = json!({ "carNumber": "123-45-678", "personId": 123 });
    let (status, _) = send(&app, Method::PUT, "/cars/trade", Some(deal)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::DELETE, "/cars/123-45-678", None).await;
    assert_eq!((status, parsed(&body)), (StatusCode::OK, car));

    let (status, body) = send(&app, Method::GET, "/cars/person/123", None).await;
    assert_eq!((status, parsed(&body)), (StatusCode::OK, json!([])));

    let (status, _) = send(&app, Method::GET, "/cars/123-45-678", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn write_routes_report_joined_violations() {
    let app = app();

    let deal = json!({ "carNumber": "12-34", "personId": 1_000_000_000, "date": "15.01.2024" });
    let (status, body) = send(&app, Method::PUT, "/cars/trade", Some(deal)).await;
    assert_eq!(
        (status, body.as_str()),
        (
            StatusCode::BAD_REQUEST,
            "Incorrect car number;Person id must be less than or equal to 999999999;\
             Date must be in ISO format (YYYY-MM-DD)"
        )
    );

    let update = json!({ "id": 123, "name": "", "birthDate": "2000-02-30", "email": "moshe@gmail.com" });
    let (status, body) = send(&app, Method::PUT, "/cars/person", Some(update)).await;
    assert_eq!(
        (status, body.as_str()),
        (StatusCode::BAD_REQUEST, "Missing person name;Date must be in ISO format (YYYY-MM-DD)")
    );
}
