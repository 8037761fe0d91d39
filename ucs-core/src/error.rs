use thiserror::Error;

/// Common error types used across the class search.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("please supply a subject")]
    MissingSubject,

    #[error("course feed is missing required column: {0}")]
    MissingColumn(String),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
