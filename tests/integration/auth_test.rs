//! Integration tests for the session flow: login, logout and cookie verification.

mod helpers;

use axum::body::Body;
use chrono::{Duration, Utc};
use http::{Request, StatusCode};
use serde_json::json;

use cardoctor_auth::jwt::TokenCodec;

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/jwt", Some(json!({ "email": "a@x.com" })), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));

    let cookie = response.token_set_cookie().expect("token cookie");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=None"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_login_token_carries_declared_claim() {
    let app = helpers::TestApp::new();
    let declared = json!({ "email": "a@x.com", "name": "Alice", "roles": ["owner"] });

    let cookie = app.login(declared.clone()).await;
    let token = cookie.trim_start_matches("token=");

    let verified = app.codec().verify(token).expect("token verifies");
    assert_eq!(verified, helpers::claim(declared));
}

#[tokio::test]
async fn test_login_rejects_non_object_body() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/jwt", Some(json!(["a@x.com"])), None)
        .await;

    assert!(response.status.is_client_error());
    assert!(response.token_set_cookie().is_none());
}

#[tokio::test]
async fn test_login_keeps_declared_issued_at() {
    let app = helpers::TestApp::new();
    let declared = json!({ "email": "a@x.com", "iat": 1 });

    let cookie = app.login(declared.clone()).await;
    let token = cookie.trim_start_matches("token=");

    let verified = app.codec().verify(token).expect("token verifies");
    assert_eq!(verified, helpers::claim(declared));

    let response = app
        .request("GET", "/bookings?email=a@x.com", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_without_body_issues_empty_claim() {
    let app = helpers::TestApp::new();

    let req = Request::builder()
        .method("POST")
        .uri("/jwt")
        .body(Body::empty())
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));

    let cookie = response.session_cookie().expect("token cookie");
    let verified = app
        .codec()
        .verify(cookie.trim_start_matches("token="))
        .expect("token verifies");
    assert!(verified.fields().is_empty());
}

#[tokio::test]
async fn test_login_rejects_declared_expiration() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/jwt",
            Some(json!({ "email": "a@x.com", "exp": 1 })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.token_set_cookie().is_none());
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/logout", Some(json!({ "email": "a@x.com" })), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "success": true, "message": "Logged out successfully" })
    );

    let cookie = response.token_set_cookie().expect("removal cookie");
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_logout_ignores_body_shape() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));
}

#[tokio::test]
async fn test_logout_does_not_revoke_captured_cookie() {
    let app = helpers::TestApp::new();
    let cookie = app.login_as("a@x.com").await;

    let logout = app.request("POST", "/logout", None, Some(&cookie)).await;
    assert_eq!(logout.status, StatusCode::OK);

    let response = app
        .request("GET", "/bookings?email=a@x.com", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_cookie_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/bookings?email=a@x.com", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body,
        json!({ "error": true, "message": "unauthorized access" })
    );
}

#[tokio::test]
async fn test_empty_cookie_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/bookings?email=a@x.com", None, Some("token="))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_forbidden() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "GET",
            "/bookings?email=a@x.com",
            None,
            Some("token=not-a-token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body,
        json!({ "error": true, "message": "unauthorized access" })
    );
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_forbidden() {
    let app = helpers::TestApp::new();
    let foreign = TokenCodec::from_secret(b"some-other-secret", Duration::hours(1))
        .issue(&helpers::claim(json!({ "email": "a@x.com" })))
        .expect("issue");

    let response = app
        .request(
            "GET",
            "/bookings?email=a@x.com",
            None,
            Some(&format!("token={}", foreign.token)),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], json!(true));
}

#[tokio::test]
async fn test_expired_token_is_forbidden() {
    let app = helpers::TestApp::new();
    let expired = app
        .codec()
        .issue_at(
            &helpers::claim(json!({ "email": "a@x.com" })),
            Utc::now() - Duration::hours(2),
        )
        .expect("issue");

    let response = app
        .request(
            "GET",
            "/bookings?email=a@x.com",
            None,
            Some(&format!("token={}", expired.token)),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body,
        json!({ "error": true, "message": "unauthorized access" })
    );
}
