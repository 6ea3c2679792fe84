//! Token codec failures.

use thiserror::Error;

use cardoctor_core::error::{AppError, ErrorKind};

/// Why a claim could not be encoded or a token could not be trusted.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The claim could not be serialized into a token.
    #[error("claim cannot be encoded: {0}")]
    Encoding(String),
    /// The signature does not match, or the token is malformed.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The token's expiration instant has passed.
    #[error("token has expired")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encoding(_) => AppError::new(ErrorKind::Validation, err.to_string()),
            TokenError::InvalidSignature | TokenError::Expired => {
                AppError::new(ErrorKind::Untrusted, err.to_string())
            }
        }
    }
}
