use thiserror::Error;

/// Error type for recipe store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `name` or `ingredients` missing or empty, or an id mismatch.
    #[error("{0}")]
    InvalidInput(String),
    /// No recipe with this id.
    #[error("recipe not found: {0}")]
    NotFound(String),
    #[error("recipe store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
