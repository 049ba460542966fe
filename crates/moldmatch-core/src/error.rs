use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not find '{0}' sheet in the Excel file")]
    MissingSheet(String),

    #[error("Invalid share link")]
    InvalidShareId(String),

    #[error("Could not find the shared comparison results")]
    ShareNotFound(String),

    #[error("{0}")]
    Other(String),
}
