use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query rejected: {0}")]
    Rejected(String),

    #[error("Failed to fetch graph: {0}")]
    Fetch(String),

    #[error("Failed to parse graph: {0}")]
    Parse(String),
}

impl QueryError {
    /// Rejected queries never reach the service, so retrying them is pointless.
    pub fn is_retryable(&self) -> bool {
        matches!(self, QueryError::Fetch(_) | QueryError::Parse(_))
    }
}
