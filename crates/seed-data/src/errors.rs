use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    HashTask(#[from] tokio::task::JoinError),

    #[error("Failed to read placeholder data at '{path}': {source}")]
    DataIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid placeholder JSON: {0}")]
    DataParse(#[from] serde_json::Error),

    #[error("Invalid placeholder data: {0}")]
    InvalidData(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
