//! Result type alias

use crate::error::TlError;

/// Standard Result type for TrackLink operations
pub type TlResult<T> = Result<T, TlError>;
