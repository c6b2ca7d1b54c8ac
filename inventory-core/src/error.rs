use thiserror::Error;

/// Errors surfaced by job-site and inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("A job site with this name already exists!")]
    DuplicateName(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A required form field is missing or malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill out all the fields! (missing name)")]
    MissingName,
    #[error("Please fill out all the fields! (select at least one category)")]
    MissingCategories,
    #[error("Please fill out all the fields! (missing status)")]
    MissingStatus,
    #[error("'{0}' is not a valid quantity: must be a whole number")]
    InvalidQuantity(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize job sites: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
