//! Integration tests for the service catalog, liveness and CORS.

mod helpers;

use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use serde_json::json;

use cardoctor_core::types::DocumentId;

#[tokio::test]
async fn test_root_reports_running() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Car Doctor Server is running");
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], json!("ok"));
    assert_eq!(response.body["store"], json!("connected"));
}

#[tokio::test]
async fn test_list_services_returns_all_documents() {
    let app = helpers::TestApp::new();
    app.seed_service(json!({ "title": "Oil change", "price": 40 }))
        .await;
    app.seed_service(json!({ "title": "Brake repair", "price": 120 }))
        .await;

    let response = app.request("GET", "/services", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let titles: Vec<&str> = response
        .body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|s| s["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Oil change", "Brake repair"]);
}

#[tokio::test]
async fn test_get_service_returns_summary_fields() {
    let app = helpers::TestApp::new();
    let id = app
        .seed_service(json!({
            "service_id": "01",
            "title": "Oil change",
            "price": 40,
            "img": "https://img.example/oil.png",
            "description": "Full synthetic",
            "facility": [{ "name": "Lift" }]
        }))
        .await;

    let response = app
        .request("GET", &format!("/services/{id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "_id": id.to_string(),
            "service_id": "01",
            "title": "Oil change",
            "price": 40,
            "img": "https://img.example/oil.png"
        })
    );
}

#[tokio::test]
async fn test_unknown_service_is_null() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", &format!("/services/{}", DocumentId::new()), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "null");
}

#[tokio::test]
async fn test_malformed_service_id_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/services/xyz", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cors_preflight_allows_credentials_for_frontend() {
    let app = helpers::TestApp::new();
    let origin = "https://car-doctor-7e43e.web.app";

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/bookings")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        origin
    );
    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let app = helpers::TestApp::new();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
