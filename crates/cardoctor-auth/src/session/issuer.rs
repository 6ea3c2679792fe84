//! Session issuance: turns a declared identity into a session cookie.

use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, SameSite};
use tracing::info;

use cardoctor_core::config::CookieConfig;
use cardoctor_core::error::AppError;
use cardoctor_core::result::AppResult;

use crate::jwt::{IdentityClaim, TokenCodec};

/// Issues and clears the session cookie.
///
/// `login` trusts the declared identity outright. A credential check, when
/// one exists, belongs in `login` before the token is issued.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    codec: Arc<TokenCodec>,
    cookie: CookieConfig,
    same_site: SameSite,
}

impl SessionIssuer {
    /// Creates an issuer. Fails when the configured `SameSite` policy is unknown.
    pub fn new(codec: Arc<TokenCodec>, cookie: CookieConfig) -> AppResult<Self> {
        let same_site = parse_same_site(&cookie.same_site)?;
        Ok(Self {
            codec,
            cookie,
            same_site,
        })
    }

    /// Name of the session cookie.
    pub fn cookie_name(&self) -> &str {
        &self.cookie.name
    }

    /// Signs the declared identity and returns the cookie carrying the token.
    pub fn login(&self, claim: &IdentityClaim) -> AppResult<Cookie<'static>> {
        let issued = self.codec.issue(claim)?;
        info!(
            email = ?claim.email(),
            expires_at = %issued.expires_at,
            "Issued session token"
        );
        Ok(self.build_cookie(issued.token))
    }

    /// Returns an immediately-expiring cookie that clears the session.
    ///
    /// Tokens issued earlier stay valid until their own expiration.
    pub fn logout(&self) -> Cookie<'static> {
        let mut cookie = self.build_cookie(String::new());
        cookie.make_removal();
        cookie
    }

    fn build_cookie(&self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(self.cookie.name.clone(), value);
        cookie.set_path(self.cookie.path.clone());
        cookie.set_http_only(self.cookie.http_only);
        cookie.set_secure(self.cookie.secure);
        cookie.set_same_site(self.same_site);
        cookie
    }
}

fn parse_same_site(value: &str) -> AppResult<SameSite> {
    match value.to_ascii_lowercase().as_str() {
        "none" => Ok(SameSite::None),
        "lax" => Ok(SameSite::Lax),
        "strict" => Ok(SameSite::Strict),
        other => Err(AppError::configuration(format!(
            "Unknown SameSite policy: '{other}'. Supported: none, lax, strict"
        ))),
    }
}
