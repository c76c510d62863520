pub mod identity;
pub mod repository;

pub use identity::{Registration, UserRecord};
pub use repository::{CredentialStore, InMemoryCredentialStore};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unable to open credential file {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Credential file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Credential record encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("User not found: {0}")]
    NotFound(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
