//! Report data types.

use chrono::NaiveDate;
use partida_shared::types::{AccountId, JournalEntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::AccountCategory;

/// Side on which an account's net balance sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSide {
    /// Net balance on the debit side (balance >= 0).
    Debtor,
    /// Net balance on the credit side (balance < 0).
    Creditor,
}

impl BalanceSide {
    /// Classifies a net balance (debits minus credits) by sign.
    #[must_use]
    pub fn from_balance(balance: Decimal) -> Self {
        if balance >= Decimal::ZERO {
            Self::Debtor
        } else {
            Self::Creditor
        }
    }
}

/// A single movement in an account's ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerMovement {
    /// The journal entry this movement belongs to.
    pub entry_id: JournalEntryId,
    /// Entry date.
    pub date: NaiveDate,
    /// Entry memo.
    pub memo: String,
    /// Debit amount (zero for credit movements).
    pub debit: Decimal,
    /// Credit amount (zero for debit movements).
    pub credit: Decimal,
    /// Running balance after this movement (debits minus credits).
    pub running_balance: Decimal,
}

/// Ledger of a single account: chronological movements and final balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountLedger {
    /// The account.
    pub account_id: AccountId,
    /// Movements in chronological order (date asc, entry number asc).
    pub movements: Vec<LedgerMovement>,
    /// Final balance (debits minus credits).
    pub balance: Decimal,
    /// Side of the final balance.
    pub side: BalanceSide,
}

/// Trial balance row for one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account category.
    pub category: AccountCategory,
    /// Total debits posted to the account.
    pub debit_total: Decimal,
    /// Total credits posted to the account.
    pub credit_total: Decimal,
    /// Net debtor balance (zero when the account is a net creditor).
    pub debtor: Decimal,
    /// Net creditor balance (zero when the account is a net debtor).
    pub creditor: Decimal,
}

/// Trial balance totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debits across all accounts.
    pub debit_total: Decimal,
    /// Total credits across all accounts.
    pub credit_total: Decimal,
    /// Whether debits equal credits within the balance tolerance.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Currency code.
    pub currency: String,
    /// Rows ordered by account code.
    pub rows: Vec<TrialBalanceRow>,
    /// Totals.
    pub totals: TrialBalanceTotals,
}

/// Per-account breakdown row within a report section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRow {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Net amount contributed by the account, signed by its normal balance.
    pub amount: Decimal,
}

/// Income statement section (revenue or expenses).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeStatementSection {
    /// Section total.
    pub total: Decimal,
    /// Per-account rows ordered by account code.
    pub rows: Vec<SectionRow>,
}

/// Outcome of an income statement period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodOutcome {
    /// Result is zero or positive.
    Profit,
    /// Result is negative.
    Loss,
}

/// Income statement report over an inclusive date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    /// Period start date (inclusive).
    pub period_start: NaiveDate,
    /// Period end date (inclusive).
    pub period_end: NaiveDate,
    /// Currency code.
    pub currency: String,
    /// Revenue section.
    pub revenue: IncomeStatementSection,
    /// Expense section.
    pub expenses: IncomeStatementSection,
    /// Result (revenue minus expenses).
    pub result: Decimal,
    /// Profit if the result is zero or positive, loss otherwise.
    pub outcome: PeriodOutcome,
}

/// Balance sheet report.
///
/// Equity is reported before the period result; the result is carried as its
/// own line, so assets balance against liabilities + equity + result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Currency code.
    pub currency: String,
    /// Total assets.
    pub assets: Decimal,
    /// Total liabilities.
    pub liabilities: Decimal,
    /// Total equity before the period result.
    pub equity: Decimal,
    /// Period result (revenue minus expenses over the supplied entries).
    pub period_result: Decimal,
    /// Liabilities plus equity plus the period result.
    pub liabilities_and_equity: Decimal,
    /// Whether assets equal liabilities plus equity within tolerance.
    pub is_balanced: bool,
}
