//! Convenience result type alias for Car Doctor.

use crate::error::AppError;

/// A specialized `Result` type for Car Doctor operations.
pub type AppResult<T> = Result<T, AppError>;
