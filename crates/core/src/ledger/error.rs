//! Ledger error types for validation and journal state errors.

use partida_shared::types::{AccountId, JournalEntryId};
use partida_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::AccountError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Entry must have at least 2 lines carrying a nonzero amount.
    #[error("Entry must have at least 2 lines with a nonzero amount")]
    InsufficientLines,

    /// Entry is not balanced (debits != credits beyond tolerance).
    #[error("Entry is not balanced. Debit: {debit}, Credit: {credit} (difference {difference})")]
    Unbalanced {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
        /// Absolute difference between the totals.
        difference: Decimal,
    },

    /// Line amount cannot be negative.
    #[error("Line amount cannot be negative")]
    NegativeAmount,

    /// Line must carry a nonzero amount on exactly one side.
    #[error("Line must carry an amount on exactly one side (debit or credit)")]
    AmbiguousSide,

    // ========== Account Errors ==========
    /// Account definition rejected.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Account is referenced by posted entries and cannot change.
    #[error("Account {0} is referenced by posted entries")]
    AccountInUse(AccountId),

    /// Duplicate account code.
    #[error("Duplicate account code: {0}")]
    DuplicateAccountCode(String),

    // ========== Entry State Errors ==========
    /// Journal entry not found.
    #[error("Journal entry not found: {0}")]
    EntryNotFound(JournalEntryId),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientLines => "INSUFFICIENT_LINES",
            Self::Unbalanced { .. } => "UNBALANCED_ENTRY",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::AmbiguousSide => "AMBIGUOUS_SIDE",
            Self::Account(err) => err.error_code(),
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::AccountInUse(_) => "ACCOUNT_IN_USE",
            Self::DuplicateAccountCode(_) => "DUPLICATE_ACCOUNT_CODE",
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound(_) | LedgerError::EntryNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            _ => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::InsufficientLines.error_code(), "INSUFFICIENT_LINES");
        assert_eq!(
            LedgerError::Unbalanced {
                debit: dec!(1000),
                credit: dec!(900),
                difference: dec!(100),
            }
            .error_code(),
            "UNBALANCED_ENTRY"
        );
        assert_eq!(LedgerError::NegativeAmount.error_code(), "NEGATIVE_AMOUNT");
        assert_eq!(LedgerError::AmbiguousSide.error_code(), "AMBIGUOUS_SIDE");
    }

    #[test]
    fn test_unbalanced_display_carries_difference() {
        let err = LedgerError::Unbalanced {
            debit: dec!(1000.00),
            credit: dec!(900.00),
            difference: dec!(100.00),
        };
        assert_eq!(
            err.to_string(),
            "Entry is not balanced. Debit: 1000.00, Credit: 900.00 (difference 100.00)"
        );
    }

    #[test]
    fn test_account_error_is_transparent() {
        let err: LedgerError = AccountError::EmptyCode.into();
        assert_eq!(err.to_string(), "Account code must not be empty");
        assert_eq!(err.error_code(), "EMPTY_ACCOUNT_CODE");
    }

    #[test]
    fn test_app_error_conversion() {
        let app: AppError = LedgerError::InsufficientLines.into();
        assert_eq!(app.error_code(), "VALIDATION_ERROR");

        let app: AppError = LedgerError::AccountNotFound(AccountId::new()).into();
        assert_eq!(app.error_code(), "NOT_FOUND");
    }
}
