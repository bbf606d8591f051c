//! Business rule validation for journal entries.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{EntryLine, EntryTotals, LineInput, Side};

/// Maximum tolerated difference between debit and credit totals.
///
/// 0.005 currency units: the rounding slack of a two-decimal currency.
/// Preserved as an exact constant; not derived from a floating-point epsilon.
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

/// Outcome of validating raw entry lines.
#[derive(Debug, Clone)]
pub struct ValidatedLines {
    /// Normalized lines, blank rows dropped, in input order.
    pub lines: Vec<EntryLine>,
    /// Debit and credit totals of the normalized lines.
    pub totals: EntryTotals,
}

/// Validates and normalizes candidate entry lines.
///
/// Rows with zero on both sides are dropped. The surviving lines must number
/// at least two, each carry a nonnegative amount on exactly one side, and
/// balance within [`BALANCE_TOLERANCE`].
///
/// # Errors
///
/// Returns an error if any line is negative or carries both sides, fewer
/// than two nonzero lines remain, or the totals do not balance.
pub fn validate_lines(lines: &[LineInput]) -> Result<ValidatedLines, LedgerError> {
    let mut normalized = Vec::with_capacity(lines.len());
    let mut total_debit = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;

    for line in lines {
        if line.debit < Decimal::ZERO || line.credit < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount);
        }
        if !line.debit.is_zero() && !line.credit.is_zero() {
            return Err(LedgerError::AmbiguousSide);
        }
        if line.is_blank() {
            continue;
        }

        let (side, amount) = if line.debit.is_zero() {
            (Side::Credit, line.credit)
        } else {
            (Side::Debit, line.debit)
        };
        match side {
            Side::Debit => total_debit += amount,
            Side::Credit => total_credit += amount,
        }
        normalized.push(EntryLine {
            account_id: line.account_id,
            side,
            amount,
        });
    }

    if normalized.len() < 2 {
        return Err(LedgerError::InsufficientLines);
    }

    let totals = EntryTotals::new(total_debit, total_credit);
    if !totals.is_balanced {
        return Err(LedgerError::Unbalanced {
            debit: totals.debit,
            credit: totals.credit,
            difference: totals.difference(),
        });
    }

    Ok(ValidatedLines {
        lines: normalized,
        totals,
    })
}
