//! Report generation service.
//!
//! All functions are pure: they take an immutable snapshot of accounts and
//! posted entries and return a fresh report. Sequencing of mutation is the
//! caller's concern.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use partida_shared::types::AccountId;
use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::{
    AccountLedger, BalanceSheetReport, BalanceSide, IncomeStatementReport,
    IncomeStatementSection, LedgerMovement, PeriodOutcome, SectionRow, TrialBalanceReport,
    TrialBalanceRow, TrialBalanceTotals,
};
use crate::account::{Account, AccountCategory};
use crate::ledger::validation::BALANCE_TOLERANCE;
use crate::ledger::JournalEntry;

/// Per-account debit and credit totals.
type Totals = BTreeMap<AccountId, (Decimal, Decimal)>;

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Folds all movements of one account into a chronological ledger.
    ///
    /// Entries are ordered by date, ties broken by entry number (insertion
    /// order). The running balance is debits minus credits; the side of the
    /// final balance is `debtor` when it is zero or positive.
    #[must_use]
    pub fn account_ledger(account_id: AccountId, entries: &[JournalEntry]) -> AccountLedger {
        let mut touching: Vec<&JournalEntry> = entries
            .iter()
            .filter(|e| e.lines.iter().any(|l| l.account_id == account_id))
            .collect();
        touching.sort_by_key(|e| (e.date, e.number));

        let mut balance = Decimal::ZERO;
        let mut movements = Vec::new();
        for entry in touching {
            for line in entry.lines.iter().filter(|l| l.account_id == account_id) {
                balance += line.signed_amount();
                movements.push(LedgerMovement {
                    entry_id: entry.id,
                    date: entry.date,
                    memo: entry.memo.clone(),
                    debit: line.debit(),
                    credit: line.credit(),
                    running_balance: balance,
                });
            }
        }

        AccountLedger {
            account_id,
            movements,
            balance,
            side: BalanceSide::from_balance(balance),
        }
    }

    /// Generates a trial balance from a snapshot of accounts and entries.
    ///
    /// Every account appears as a row (ordered by code) with its debit and
    /// credit totals plus the net debtor/creditor columns. The report is
    /// balanced iff total debits equal total credits within tolerance.
    #[must_use]
    pub fn trial_balance(
        accounts: &[Account],
        entries: &[JournalEntry],
        currency: &str,
    ) -> TrialBalanceReport {
        let totals = Self::account_totals(entries, None);

        let mut rows: Vec<TrialBalanceRow> = accounts
            .iter()
            .map(|account| {
                let (debit_total, credit_total) = totals
                    .get(&account.id)
                    .copied()
                    .unwrap_or((Decimal::ZERO, Decimal::ZERO));
                let balance = debit_total - credit_total;
                let (debtor, creditor) = if balance >= Decimal::ZERO {
                    (balance, Decimal::ZERO)
                } else {
                    (Decimal::ZERO, -balance)
                };
                TrialBalanceRow {
                    account_id: account.id,
                    code: account.code.clone(),
                    name: account.name.clone(),
                    category: account.category,
                    debit_total,
                    credit_total,
                    debtor,
                    creditor,
                }
            })
            .collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));

        let debit_total: Decimal = rows.iter().map(|r| r.debit_total).sum();
        let credit_total: Decimal = rows.iter().map(|r| r.credit_total).sum();

        TrialBalanceReport {
            currency: currency.to_string(),
            rows,
            totals: TrialBalanceTotals {
                debit_total,
                credit_total,
                is_balanced: (debit_total - credit_total).abs() <= BALANCE_TOLERANCE,
            },
        }
    }

    /// Generates an income statement over an inclusive date range.
    ///
    /// Revenue accounts contribute credits minus debits, expense accounts
    /// debits minus credits; the result is revenue minus expenses, labelled
    /// profit when zero or positive.
    ///
    /// # Errors
    ///
    /// Returns an error if `period_start` is after `period_end`.
    pub fn income_statement(
        accounts: &[Account],
        entries: &[JournalEntry],
        period_start: NaiveDate,
        period_end: NaiveDate,
        currency: &str,
    ) -> Result<IncomeStatementReport, ReportError> {
        if period_start > period_end {
            return Err(ReportError::InvalidDateRange {
                start: period_start,
                end: period_end,
            });
        }

        let totals = Self::account_totals(entries, Some((period_start, period_end)));
        let revenue = Self::section(accounts, &totals, AccountCategory::Revenue);
        let expenses = Self::section(accounts, &totals, AccountCategory::Expense);

        let result = revenue.total - expenses.total;
        Ok(IncomeStatementReport {
            period_start,
            period_end,
            currency: currency.to_string(),
            revenue,
            expenses,
            result,
            outcome: if result >= Decimal::ZERO {
                PeriodOutcome::Profit
            } else {
                PeriodOutcome::Loss
            },
        })
    }

    /// Generates a balance sheet from a snapshot of accounts and entries.
    ///
    /// Equity is reported before the period result; the result (revenue
    /// minus expenses over all supplied entries) is its own line, so for
    /// balanced books assets equal liabilities + equity + result.
    #[must_use]
    pub fn balance_sheet(
        accounts: &[Account],
        entries: &[JournalEntry],
        currency: &str,
    ) -> BalanceSheetReport {
        let totals = Self::account_totals(entries, None);

        let mut assets = Decimal::ZERO;
        let mut liabilities = Decimal::ZERO;
        let mut equity = Decimal::ZERO;
        let mut revenue = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;

        for account in accounts {
            let (debit, credit) = totals
                .get(&account.id)
                .copied()
                .unwrap_or((Decimal::ZERO, Decimal::ZERO));
            let signed = account.category.normal_balance().signed(debit, credit);
            match account.category {
                AccountCategory::Asset => assets += signed,
                AccountCategory::Liability => liabilities += signed,
                AccountCategory::Equity => equity += signed,
                AccountCategory::Revenue => revenue += signed,
                AccountCategory::Expense => expenses += signed,
            }
        }

        let period_result = revenue - expenses;
        let liabilities_and_equity = liabilities + equity + period_result;

        BalanceSheetReport {
            currency: currency.to_string(),
            assets,
            liabilities,
            equity,
            period_result,
            liabilities_and_equity,
            is_balanced: (assets - liabilities_and_equity).abs() <= BALANCE_TOLERANCE,
        }
    }

    /// Accumulates per-account (debit, credit) totals, optionally filtered
    /// to an inclusive date range.
    fn account_totals(
        entries: &[JournalEntry],
        period: Option<(NaiveDate, NaiveDate)>,
    ) -> Totals {
        let mut totals = Totals::new();
        for entry in entries {
            if let Some((start, end)) = period {
                if entry.date < start || entry.date > end {
                    continue;
                }
            }
            for line in &entry.lines {
                let (debit, credit) = totals
                    .entry(line.account_id)
                    .or_insert((Decimal::ZERO, Decimal::ZERO));
                *debit += line.debit();
                *credit += line.credit();
            }
        }
        totals
    }

    /// Builds a report section for every account of the given category,
    /// signed by the category's normal balance, ordered by account code.
    fn section(
        accounts: &[Account],
        totals: &Totals,
        category: AccountCategory,
    ) -> IncomeStatementSection {
        let normal = category.normal_balance();
        let mut rows: Vec<SectionRow> = accounts
            .iter()
            .filter(|a| a.category == category)
            .map(|account| {
                let (debit, credit) = totals
                    .get(&account.id)
                    .copied()
                    .unwrap_or((Decimal::ZERO, Decimal::ZERO));
                SectionRow {
                    account_id: account.id,
                    code: account.code.clone(),
                    name: account.name.clone(),
                    amount: normal.signed(debit, credit),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));

        IncomeStatementSection {
            total: rows.iter().map(|r| r.amount).sum(),
            rows,
        }
    }
}
