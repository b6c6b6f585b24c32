use crate::domain::errors::RepositoryError;
use crate::domain::extraction::errors::ExtractionError;

#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt.name_empty")]
    NameEmpty,
    #[error("receipt.name_too_long")]
    NameTooLong { max: usize },
    #[error("receipt.not_found")]
    NotFound,
    #[error("receipt.none_selected")]
    NoneSelected,
    #[error("receipt.insights_failed")]
    InsightsFailed,
    #[error("receipt.image_storage")]
    ImageStorage(#[source] RepositoryError),
    #[error("receipt.extraction: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
