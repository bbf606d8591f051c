//! Account error types.

use partida_shared::AppError;
use thiserror::Error;

use super::types::AccountCategory;

/// Errors that can occur when defining chart of accounts entries.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Account code must not be empty.
    #[error("Account code must not be empty")]
    EmptyCode,

    /// Account name must not be empty.
    #[error("Account name must not be empty")]
    EmptyName,

    /// Subcategory does not belong to the category's catalog.
    #[error("Unknown subcategory `{subcategory}` for category `{category}`")]
    UnknownSubcategory {
        /// The account category.
        category: AccountCategory,
        /// The rejected subcategory.
        subcategory: String,
    },
}

impl AccountError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyCode => "EMPTY_ACCOUNT_CODE",
            Self::EmptyName => "EMPTY_ACCOUNT_NAME",
            Self::UnknownSubcategory { .. } => "UNKNOWN_SUBCATEGORY",
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        Self::Validation(err.to_string())
    }
}
