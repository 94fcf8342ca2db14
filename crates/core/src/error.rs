#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ScreeningResult<T> = std::result::Result<T, ScreeningError>;

/// Errors surfaced by [`crate::store::RecommendationStore`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("recommendation store unavailable: {0}")]
    Unavailable(String),
    #[error("invalid recommendation id: {0}")]
    InvalidRecommendationId(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
