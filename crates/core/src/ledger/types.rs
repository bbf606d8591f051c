//! Journal entry domain types.
//!
//! This module defines the types used for creating and validating journal
//! entries in the double-entry bookkeeping system.

use chrono::NaiveDate;
use partida_shared::types::{AccountId, JournalEntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::BALANCE_TOLERANCE;

/// Side of an entry line: either Debit or Credit.
///
/// In double-entry bookkeeping:
/// - Debits increase asset/expense accounts, decrease liability/equity/revenue accounts
/// - Credits decrease asset/expense accounts, increase liability/equity/revenue accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Debit line.
    Debit,
    /// Credit line.
    Credit,
}

/// Raw candidate line as entered, before normalization.
///
/// Carries both sides because the entry form does; validation turns it into
/// an [`EntryLine`] with exactly one side set, or rejects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineInput {
    /// The account to post to.
    pub account_id: AccountId,
    /// Debit amount as entered (zero if the credit side is used).
    pub debit: Decimal,
    /// Credit amount as entered (zero if the debit side is used).
    pub credit: Decimal,
}

impl LineInput {
    /// Returns true when both sides are zero (a blank form row).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.debit.is_zero() && self.credit.is_zero()
    }
}

/// A normalized line of a journal entry.
///
/// Invariant: `amount` >= 0 and nonzero on exactly one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryLine {
    /// The account affected by this line.
    pub account_id: AccountId,
    /// Whether this is a debit or credit.
    pub side: Side,
    /// Amount posted on `side`.
    pub amount: Decimal,
}

impl EntryLine {
    /// Returns the debit amount (zero for credit lines).
    #[must_use]
    pub fn debit(&self) -> Decimal {
        match self.side {
            Side::Debit => self.amount,
            Side::Credit => Decimal::ZERO,
        }
    }

    /// Returns the credit amount (zero for debit lines).
    #[must_use]
    pub fn credit(&self) -> Decimal {
        match self.side {
            Side::Debit => Decimal::ZERO,
            Side::Credit => self.amount,
        }
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.side {
            Side::Debit => self.amount,
            Side::Credit => -self.amount,
        }
    }
}

/// Debit and credit totals of an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryTotals {
    /// Total debit amount.
    pub debit: Decimal,
    /// Total credit amount.
    pub credit: Decimal,
    /// Whether the entry is balanced within [`BALANCE_TOLERANCE`].
    pub is_balanced: bool,
}

impl EntryTotals {
    /// Creates entry totals from debit and credit sums.
    #[must_use]
    pub fn new(debit: Decimal, credit: Decimal) -> Self {
        Self {
            debit,
            credit,
            is_balanced: (debit - credit).abs() <= BALANCE_TOLERANCE,
        }
    }

    /// Returns the absolute difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        (self.debit - self.credit).abs()
    }
}

/// Input for posting a new journal entry.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    /// The date of the entry.
    pub date: NaiveDate,
    /// Free-text memo.
    pub memo: String,
    /// Candidate lines (at least 2 must carry a nonzero amount).
    pub lines: Vec<LineInput>,
}

/// A posted journal entry.
///
/// Never mutated in place after posting; edits replace the whole entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier.
    pub id: JournalEntryId,
    /// Sequential entry number within the journal.
    pub number: u32,
    /// The date of the entry.
    pub date: NaiveDate,
    /// Free-text memo.
    pub memo: String,
    /// Normalized lines, in entry order.
    pub lines: Vec<EntryLine>,
}

impl JournalEntry {
    /// Returns the debit and credit totals of this entry.
    #[must_use]
    pub fn totals(&self) -> EntryTotals {
        let debit: Decimal = self.lines.iter().map(EntryLine::debit).sum();
        let credit: Decimal = self.lines.iter().map(EntryLine::credit).sum();
        EntryTotals::new(debit, credit)
    }
}
