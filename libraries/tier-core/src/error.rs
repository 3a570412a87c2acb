/// Core error types for Tier
use thiserror::Error;

/// Result type alias using `TierError`
pub type Result<T> = std::result::Result<T, TierError>;

/// Core error type for Tier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TierError {
    /// Address does not conform to email syntax
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// An account with this email already exists
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
        /// Key used for the lookup
        id: String,
    },
}

impl TierError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}
