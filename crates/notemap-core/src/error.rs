use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotemapError>;

#[derive(Debug, Error)]
pub enum NotemapError {
    /// Raised only when an edge type is constructed from a value that is
    /// neither empty, a string, nor a record. Everything else fails open.
    #[error("Invalid edge type source: {reason}")]
    InvalidType { reason: String },

    #[error("Store error: {0}")]
    Store(String),
}
