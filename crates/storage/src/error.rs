use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Team not found")]
    TeamNotFound,

    #[error("Team name cannot be empty")]
    EmptyTeamName,
}

pub type Result<T> = std::result::Result<T, StorageError>;
