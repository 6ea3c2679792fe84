//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use cardoctor_auth::guard::AccessGuard;
use cardoctor_auth::jwt::TokenCodec;
use cardoctor_auth::session::{SessionIssuer, SessionVerifier};
use cardoctor_core::config::AppConfig;
use cardoctor_core::result::AppResult;
use cardoctor_store::StoreManager;
use cardoctor_store::repositories::{BookingRepository, ServiceRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Document store collections
    pub store: Arc<StoreManager>,

    // ── Auth ─────────────────────────────────────────────────
    /// Token codec shared by issuer and verifier
    pub token_codec: Arc<TokenCodec>,
    /// Session cookie issuer (login/logout)
    pub session_issuer: Arc<SessionIssuer>,
    /// Session cookie verifier
    pub session_verifier: Arc<SessionVerifier>,
    /// Booking scope guard
    pub access_guard: AccessGuard,

    // ── Repositories ─────────────────────────────────────────
    /// Service catalog repository
    pub service_repo: Arc<ServiceRepository>,
    /// Booking repository
    pub booking_repo: Arc<BookingRepository>,
}

impl AppState {
    /// Wires the auth components and repositories around an opened store.
    pub fn new(config: AppConfig, store: StoreManager) -> AppResult<Self> {
        let token_codec = Arc::new(TokenCodec::new(&config.auth));
        let session_issuer = Arc::new(SessionIssuer::new(
            Arc::clone(&token_codec),
            config.auth.cookie.clone(),
        )?);
        let session_verifier = Arc::new(SessionVerifier::new(Arc::clone(&token_codec)));

        let service_repo = Arc::new(ServiceRepository::new(store.services()));
        let booking_repo = Arc::new(BookingRepository::new(store.bookings()));

        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(store),
            token_codec,
            session_issuer,
            session_verifier,
            access_guard: AccessGuard::new(),
            service_repo,
            booking_repo,
        })
    }
}
