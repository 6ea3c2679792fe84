//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use cardoctor_auth::jwt::{IdentityClaim, TokenCodec};
use cardoctor_core::config::AppConfig;
use cardoctor_core::traits::DocumentCollection;
use cardoctor_core::result::AppResult;
use cardoctor_core::types::{
    DeleteResult, Document, DocumentFilter, DocumentId, InsertResult, Projection, UpdateResult,
};
use cardoctor_store::StoreManager;
use cardoctor_store::memory::MemoryCollection;

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store shared with the router, for seeding and direct reads
    pub store: StoreManager,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over fresh in-memory collections
    pub fn new() -> Self {
        let config = test_config();
        let store = StoreManager::in_memory(&config.store);
        Self::with_store(config, store)
    }

    /// Create a test application whose bookings collection counts every call
    pub fn with_counted_bookings() -> (Self, CountingCollection) {
        let config = test_config();
        let bookings = CountingCollection::new(config.store.bookings_collection.clone());
        let store = StoreManager::from_collections(
            Arc::new(MemoryCollection::new(config.store.services_collection.clone())),
            Arc::new(bookings.clone()),
        );
        (Self::with_store(config, store), bookings)
    }

    /// Create a test application over the given store
    pub fn with_store(config: AppConfig, store: StoreManager) -> Self {
        let router = cardoctor_api::build_app(config.clone(), store.clone())
            .expect("Failed to build app");

        Self {
            router,
            store,
            config,
        }
    }

    /// Codec sharing the app's secret and TTL, for crafting tokens directly
    pub fn codec(&self) -> TokenCodec {
        TokenCodec::new(&self.config.auth)
    }

    /// Insert a service document straight into the store
    pub async fn seed_service(&self, service: Value) -> DocumentId {
        self.store
            .services()
            .insert_one(as_document(service))
            .await
            .expect("Failed to seed service")
            .inserted_id
    }

    /// Insert a booking document straight into the store
    pub async fn seed_booking(&self, booking: Value) -> DocumentId {
        self.store
            .bookings()
            .insert_one(as_document(booking))
            .await
            .expect("Failed to seed booking")
            .inserted_id
    }

    /// Log in with the given claim and return the `name=value` cookie pair
    pub async fn login(&self, claim: Value) -> String {
        let response = self.request("POST", "/jwt", Some(claim), None).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .session_cookie()
            .expect("No session cookie in login response")
    }

    /// Log in as `email` only
    pub async fn login_as(&self, email: &str) -> String {
        self.login(serde_json::json!({ "email": email })).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prebuilt request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let set_cookies = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(str::to_string))
            .collect();

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            set_cookies,
            text,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Raw `Set-Cookie` header values
    pub set_cookies: Vec<String>,
    /// Raw body text
    pub text: String,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
}

impl TestResponse {
    /// The `Set-Cookie` header for the `token` cookie, if any
    pub fn token_set_cookie(&self) -> Option<&str> {
        self.set_cookies
            .iter()
            .map(String::as_str)
            .find(|c| c.starts_with("token="))
    }

    /// The `token=value` pair, suitable for a `Cookie` request header
    pub fn session_cookie(&self) -> Option<String> {
        self.token_set_cookie()
            .and_then(|c| c.split(';').next())
            .map(|pair| pair.trim().to_string())
    }
}

/// Bookings collection over memory that records how often it is touched
#[derive(Debug, Clone)]
pub struct CountingCollection {
    inner: MemoryCollection,
    calls: Arc<AtomicUsize>,
}

impl CountingCollection {
    /// Create an empty counted collection
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: MemoryCollection::new(name),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of store operations performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentCollection for CountingCollection {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn find(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>> {
        self.touch();
        self.inner.find(filter).await
    }

    async fn find_one(
        &self,
        id: &DocumentId,
        projection: Option<&Projection>,
    ) -> AppResult<Option<Document>> {
        self.touch();
        self.inner.find_one(id, projection).await
    }

    async fn insert_one(&self, doc: Document) -> AppResult<InsertResult> {
        self.touch();
        self.inner.insert_one(doc).await
    }

    async fn update_one(&self, id: &DocumentId, fields: Document) -> AppResult<UpdateResult> {
        self.touch();
        self.inner.update_one(id, fields).await
    }

    async fn delete_one(&self, id: &DocumentId) -> AppResult<DeleteResult> {
        self.touch();
        self.inner.delete_one(id).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.touch();
        self.inner.count().await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.token_secret = TEST_SECRET.to_string();
    config.validate().expect("Test config must be valid");
    config
}

/// Turn a JSON object literal into a document
pub fn as_document(value: Value) -> Document {
    value
        .as_object()
        .cloned()
        .expect("Document must be a JSON object")
}

/// Build a claim from a JSON object literal
pub fn claim(value: Value) -> IdentityClaim {
    serde_json::from_value(value).expect("Claim must be a JSON object")
}
