//! HS256 token issuance and verification with a single symmetric secret.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use cardoctor_core::config::AuthConfig;

use super::claims::{EXPIRES_AT, IdentityClaim, TokenClaims};
use super::error::TokenError;

/// A freshly signed token and the instant it stops verifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// The signed token string.
    pub token: String,
    /// Expiration instant embedded in the token.
    pub expires_at: DateTime<Utc>,
}

/// Signs identity claims into time-bounded tokens and verifies them back.
///
/// Pure: no I/O and no server-side token state.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(
            config.token_secret.as_bytes(),
            Duration::minutes(config.token_ttl_minutes as i64),
        )
    }

    /// Creates a codec from a raw secret and token lifetime.
    pub fn from_secret(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        // Claims are caller-defined; an `aud` field must round-trip untouched.
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Signs `claim` with an expiration of now + TTL.
    pub fn issue(&self, claim: &IdentityClaim) -> Result<IssuedToken, TokenError> {
        self.issue_at(claim, Utc::now())
    }

    /// Signs `claim` as if issued at `issued_at`.
    ///
    /// The expiration is always computed here; a declared `iat` is signed as-is.
    pub fn issue_at(
        &self,
        claim: &IdentityClaim,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        if claim.fields().contains_key(EXPIRES_AT) {
            return Err(TokenError::Encoding(format!(
                "claim already carries the registered '{EXPIRES_AT}' field"
            )));
        }

        let expires_at = issued_at + self.ttl;
        let claims = TokenClaims {
            identity: claim.fields().clone(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verifies signature and expiration and returns the claim exactly as issued.
    ///
    /// Malformed tokens report `InvalidSignature`.
    pub fn verify(&self, token: &str) -> Result<IdentityClaim, TokenError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::InvalidSignature,
            },
        )?;

        Ok(IdentityClaim::new(data.claims.identity))
    }
}
