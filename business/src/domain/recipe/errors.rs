#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.no_receipts")]
    NoReceipts,
    #[error("recipe.receipt_not_found")]
    ReceiptNotFound,
    #[error("recipe.invalid_recipe")]
    InvalidRecipe,
    #[error("recipe.generation_failed")]
    GenerationFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
