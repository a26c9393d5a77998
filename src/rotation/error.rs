//! Error types for rotation operations

use std::fmt;
use std::io;

/// Result type for rotation operations
pub type RotationResult<T> = Result<T, RotationError>;

/// Errors that can occur in rotation operations
///
/// Every failure is returned to the caller as a value; no operation leaves
/// a partial mutation behind. `Io` and `Json` are persistence failures: on
/// either, the in-memory state stays at its pre-operation value.
#[derive(Debug)]
pub enum RotationError {
    /// Position out of bounds; a caller bug, unreachable through the
    /// key-based API
    InvalidIndex { index: usize, len: usize },
    /// Key absent from the partition the operation expected it in
    NotFound(String),
    /// Duplicate key on add
    AlreadyExists(String),
    /// Promote/demote at a list edge; a no-op signal, not a user error
    BoundaryReached,
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationError::InvalidIndex { index, len } => {
                write!(f, "index {} out of bounds for roster of {}", index, len)
            }
            RotationError::NotFound(key) => write!(f, "member '{}' not found", key),
            RotationError::AlreadyExists(key) => {
                write!(f, "member '{}' already exists", key)
            }
            RotationError::BoundaryReached => write!(f, "member is already at the list edge"),
            RotationError::Io(e) => write!(f, "IO error: {}", e),
            RotationError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for RotationError {}

impl From<io::Error> for RotationError {
    fn from(e: io::Error) -> Self {
        RotationError::Io(e)
    }
}

impl From<serde_json::Error> for RotationError {
    fn from(e: serde_json::Error) -> Self {
        RotationError::Json(e)
    }
}
