//! Identity claims and token encoding/decoding.

pub mod claims;
pub mod codec;
pub mod error;

pub use claims::IdentityClaim;
pub use codec::{IssuedToken, TokenCodec};
pub use error::TokenError;
