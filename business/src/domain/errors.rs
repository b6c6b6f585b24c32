/// Errors raised by storage adapters: the receipts table, the image store and
/// the extraction cache.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.invalid_key")]
    InvalidKey,
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.serialization_error")]
    Serialization,
    #[error("repository.io_error")]
    Io(#[source] std::io::Error),
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => RepositoryError::NotFound,
            _ => RepositoryError::Io(err),
        }
    }
}
