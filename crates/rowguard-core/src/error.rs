use thiserror::Error;

/// Core error type shared across rowguard crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The table definition violates naming or uniqueness rules.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// A requested feature is not supported.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Convenience alias for results returned by rowguard crates.
pub type Result<T> = std::result::Result<T, Error>;
