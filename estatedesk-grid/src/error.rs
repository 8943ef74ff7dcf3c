use thiserror::Error;

/// Errors raised while building grid state from caller-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("invalid session record: {0}")]
    InvalidSession(String),
}
