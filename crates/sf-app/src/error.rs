//! Error types for the sf-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Table error: {0}")]
    Table(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported project file extension: {0}")]
    UnsupportedExtension(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<sf_project::ProjectError> for AppError {
    fn from(err: sf_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<sf_table::TableError> for AppError {
    fn from(err: sf_table::TableError) -> Self {
        AppError::Table(err.to_string())
    }
}

impl From<sf_graph::GraphError> for AppError {
    fn from(err: sf_graph::GraphError) -> Self {
        AppError::Graph(err.to_string())
    }
}
