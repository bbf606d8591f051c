//! Unit and property-based tests for report generation.

use chrono::NaiveDate;
use partida_shared::types::{AccountId, JournalEntryId};
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ReportError;
use super::service::ReportService;
use super::types::{BalanceSide, PeriodOutcome};
use crate::account::{Account, AccountCategory};
use crate::ledger::{EntryLine, JournalEntry, Side};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn account(code: &str, name: &str, category: AccountCategory) -> Account {
    Account {
        id: AccountId::new(),
        code: code.to_string(),
        name: name.to_string(),
        category,
        subcategory: None,
    }
}

fn debit(account_id: AccountId, amount: Decimal) -> EntryLine {
    EntryLine {
        account_id,
        side: Side::Debit,
        amount,
    }
}

fn credit(account_id: AccountId, amount: Decimal) -> EntryLine {
    EntryLine {
        account_id,
        side: Side::Credit,
        amount,
    }
}

fn entry(number: u32, entry_date: NaiveDate, lines: Vec<EntryLine>) -> JournalEntry {
    JournalEntry {
        id: JournalEntryId::new(),
        number,
        date: entry_date,
        memo: format!("Asiento {number}"),
        lines,
    }
}

/// Minimal chart: one account per category.
struct Chart {
    caja: Account,
    proveedores: Account,
    capital: Account,
    ventas: Account,
    alquileres: Account,
}

impl Chart {
    fn new() -> Self {
        Self {
            caja: account("1.1.01", "Caja", AccountCategory::Asset),
            proveedores: account("2.1.01", "Proveedores", AccountCategory::Liability),
            capital: account("3.1.01", "Capital", AccountCategory::Equity),
            ventas: account("4.1.01", "Ventas", AccountCategory::Revenue),
            alquileres: account("5.1.01", "Alquileres", AccountCategory::Expense),
        }
    }

    fn accounts(&self) -> Vec<Account> {
        vec![
            self.caja.clone(),
            self.proveedores.clone(),
            self.capital.clone(),
            self.ventas.clone(),
            self.alquileres.clone(),
        ]
    }
}

// ============================================================================
// Account ledger
// ============================================================================

#[test]
fn test_account_ledger_running_balance() {
    let chart = Chart::new();
    let entries = vec![
        entry(
            1,
            date(2026, 3, 1),
            vec![
                debit(chart.caja.id, dec!(1000)),
                credit(chart.ventas.id, dec!(1000)),
            ],
        ),
        entry(
            2,
            date(2026, 3, 5),
            vec![
                debit(chart.alquileres.id, dec!(400)),
                credit(chart.caja.id, dec!(400)),
            ],
        ),
    ];

    let ledger = ReportService::account_ledger(chart.caja.id, &entries);
    assert_eq!(ledger.movements.len(), 2);
    assert_eq!(ledger.movements[0].running_balance, dec!(1000));
    assert_eq!(ledger.movements[1].running_balance, dec!(600));
    assert_eq!(ledger.balance, dec!(600));
    assert_eq!(ledger.side, BalanceSide::Debtor);
}

#[test]
fn test_account_ledger_orders_by_date_then_number() {
    let chart = Chart::new();
    // Posted out of date order; same-date ties resolved by entry number
    let entries = vec![
        entry(
            1,
            date(2026, 3, 10),
            vec![
                debit(chart.caja.id, dec!(300)),
                credit(chart.ventas.id, dec!(300)),
            ],
        ),
        entry(
            2,
            date(2026, 3, 1),
            vec![
                debit(chart.caja.id, dec!(100)),
                credit(chart.ventas.id, dec!(100)),
            ],
        ),
        entry(
            3,
            date(2026, 3, 10),
            vec![
                debit(chart.caja.id, dec!(50)),
                credit(chart.ventas.id, dec!(50)),
            ],
        ),
    ];

    let ledger = ReportService::account_ledger(chart.caja.id, &entries);
    let dates: Vec<NaiveDate> = ledger.movements.iter().map(|m| m.date).collect();
    assert_eq!(
        dates,
        vec![date(2026, 3, 1), date(2026, 3, 10), date(2026, 3, 10)]
    );
    // 100, then entry 1 before entry 3 on the same date
    assert_eq!(ledger.movements[1].debit, dec!(300));
    assert_eq!(ledger.movements[2].debit, dec!(50));
    assert_eq!(ledger.balance, dec!(450));
}

#[test]
fn test_account_ledger_creditor_side() {
    let chart = Chart::new();
    let entries = vec![entry(
        1,
        date(2026, 3, 1),
        vec![
            debit(chart.caja.id, dec!(500)),
            credit(chart.ventas.id, dec!(500)),
        ],
    )];

    let ledger = ReportService::account_ledger(chart.ventas.id, &entries);
    assert_eq!(ledger.balance, dec!(-500));
    assert_eq!(ledger.side, BalanceSide::Creditor);
}

#[test]
fn test_account_ledger_empty_is_debtor_zero() {
    let chart = Chart::new();
    let ledger = ReportService::account_ledger(chart.caja.id, &[]);
    assert!(ledger.movements.is_empty());
    assert_eq!(ledger.balance, Decimal::ZERO);
    assert_eq!(ledger.side, BalanceSide::Debtor);
}

// ============================================================================
// Trial balance
// ============================================================================

#[test]
fn test_trial_balance_totals_and_columns() {
    let chart = Chart::new();
    let entries = vec![
        entry(
            1,
            date(2026, 3, 1),
            vec![
                debit(chart.caja.id, dec!(1000)),
                credit(chart.ventas.id, dec!(1000)),
            ],
        ),
        entry(
            2,
            date(2026, 3, 2),
            vec![
                debit(chart.alquileres.id, dec!(200)),
                credit(chart.caja.id, dec!(200)),
            ],
        ),
    ];

    let report = ReportService::trial_balance(&chart.accounts(), &entries, "ARS");
    assert_eq!(report.currency, "ARS");
    assert_eq!(report.rows.len(), 5);
    assert!(report.totals.is_balanced);
    assert_eq!(report.totals.debit_total, dec!(1200));
    assert_eq!(report.totals.credit_total, dec!(1200));

    // Rows come back ordered by code; Caja is first
    let caja = &report.rows[0];
    assert_eq!(caja.code, "1.1.01");
    assert_eq!(caja.debit_total, dec!(1000));
    assert_eq!(caja.credit_total, dec!(200));
    assert_eq!(caja.debtor, dec!(800));
    assert_eq!(caja.creditor, Decimal::ZERO);

    let ventas = report.rows.iter().find(|r| r.code == "4.1.01").unwrap();
    assert_eq!(ventas.debtor, Decimal::ZERO);
    assert_eq!(ventas.creditor, dec!(1000));
}

#[test]
fn test_trial_balance_unbalanced_books() {
    let chart = Chart::new();
    // A lone one-sided entry constructed directly (bypassing validation)
    let entries = vec![entry(
        1,
        date(2026, 3, 1),
        vec![debit(chart.caja.id, dec!(100))],
    )];

    let report = ReportService::trial_balance(&chart.accounts(), &entries, "ARS");
    assert!(!report.totals.is_balanced);
    assert_eq!(report.totals.debit_total, dec!(100));
    assert_eq!(report.totals.credit_total, Decimal::ZERO);
}

#[test]
fn test_trial_balance_accounts_without_movements() {
    let chart = Chart::new();
    let report = ReportService::trial_balance(&chart.accounts(), &[], "ARS");
    assert!(report.totals.is_balanced);
    assert!(report
        .rows
        .iter()
        .all(|r| r.debit_total.is_zero() && r.credit_total.is_zero()));
}

// ============================================================================
// Income statement
// ============================================================================

fn sales_and_rent() -> (Chart, Vec<JournalEntry>) {
    let chart = Chart::new();
    let entries = vec![
        entry(
            1,
            date(2026, 3, 10),
            vec![
                debit(chart.caja.id, dec!(1000)),
                credit(chart.ventas.id, dec!(1000)),
            ],
        ),
        entry(
            2,
            date(2026, 3, 20),
            vec![
                debit(chart.alquileres.id, dec!(400)),
                credit(chart.caja.id, dec!(400)),
            ],
        ),
    ];
    (chart, entries)
}

#[test]
fn test_income_statement_profit() {
    let (chart, entries) = sales_and_rent();
    let report = ReportService::income_statement(
        &chart.accounts(),
        &entries,
        date(2026, 3, 1),
        date(2026, 3, 31),
        "ARS",
    )
    .unwrap();

    assert_eq!(report.revenue.total, dec!(1000));
    assert_eq!(report.expenses.total, dec!(400));
    assert_eq!(report.result, dec!(600));
    assert_eq!(report.outcome, PeriodOutcome::Profit);
}

#[test]
fn test_income_statement_loss() {
    let chart = Chart::new();
    let entries = vec![entry(
        1,
        date(2026, 3, 5),
        vec![
            debit(chart.alquileres.id, dec!(700)),
            credit(chart.caja.id, dec!(700)),
        ],
    )];

    let report = ReportService::income_statement(
        &chart.accounts(),
        &entries,
        date(2026, 3, 1),
        date(2026, 3, 31),
        "ARS",
    )
    .unwrap();

    assert_eq!(report.result, dec!(-700));
    assert_eq!(report.outcome, PeriodOutcome::Loss);
}

#[rstest]
// Entry dated 2026-03-10: endpoints are inclusive
#[case(date(2026, 3, 10), date(2026, 3, 10), dec!(1000))]
#[case(date(2026, 3, 1), date(2026, 3, 10), dec!(1000))]
#[case(date(2026, 3, 10), date(2026, 3, 31), dec!(1000))]
// Outside the range: excluded
#[case(date(2026, 3, 11), date(2026, 3, 31), dec!(0))]
#[case(date(2026, 2, 1), date(2026, 3, 9), dec!(0))]
fn test_income_statement_date_range_inclusive(
    #[case] start: NaiveDate,
    #[case] end: NaiveDate,
    #[case] expected_revenue: Decimal,
) {
    let (chart, entries) = sales_and_rent();
    let report =
        ReportService::income_statement(&chart.accounts(), &entries, start, end, "ARS").unwrap();
    assert_eq!(report.revenue.total, expected_revenue);
}

#[test]
fn test_income_statement_invalid_range() {
    let (chart, entries) = sales_and_rent();
    let result = ReportService::income_statement(
        &chart.accounts(),
        &entries,
        date(2026, 4, 1),
        date(2026, 3, 1),
        "ARS",
    );
    assert!(matches!(result, Err(ReportError::InvalidDateRange { .. })));
}

#[test]
fn test_income_statement_section_rows() {
    let (chart, entries) = sales_and_rent();
    let report = ReportService::income_statement(
        &chart.accounts(),
        &entries,
        date(2026, 3, 1),
        date(2026, 3, 31),
        "ARS",
    )
    .unwrap();

    assert_eq!(report.revenue.rows.len(), 1);
    assert_eq!(report.revenue.rows[0].name, "Ventas");
    assert_eq!(report.revenue.rows[0].amount, dec!(1000));
    assert_eq!(report.expenses.rows.len(), 1);
    assert_eq!(report.expenses.rows[0].amount, dec!(400));
}

// ============================================================================
// Balance sheet
// ============================================================================

#[test]
fn test_balance_sheet_balances() {
    let chart = Chart::new();
    let entries = vec![
        // Capital contribution
        entry(
            1,
            date(2026, 1, 2),
            vec![
                debit(chart.caja.id, dec!(5000)),
                credit(chart.capital.id, dec!(5000)),
            ],
        ),
        // Sale
        entry(
            2,
            date(2026, 2, 1),
            vec![
                debit(chart.caja.id, dec!(1000)),
                credit(chart.ventas.id, dec!(1000)),
            ],
        ),
        // Rent on credit
        entry(
            3,
            date(2026, 2, 10),
            vec![
                debit(chart.alquileres.id, dec!(400)),
                credit(chart.proveedores.id, dec!(400)),
            ],
        ),
    ];

    let report = ReportService::balance_sheet(&chart.accounts(), &entries, "ARS");
    assert_eq!(report.assets, dec!(6000));
    assert_eq!(report.liabilities, dec!(400));
    assert_eq!(report.equity, dec!(5000));
    assert_eq!(report.period_result, dec!(600));
    assert_eq!(report.liabilities_and_equity, dec!(6000));
    assert!(report.is_balanced);
}

#[test]
fn test_balance_sheet_empty() {
    let chart = Chart::new();
    let report = ReportService::balance_sheet(&chart.accounts(), &[], "ARS");
    assert!(report.is_balanced);
    assert_eq!(report.assets, Decimal::ZERO);
}

// ============================================================================
// Properties
// ============================================================================

/// Strategy for a batch of balanced two-line entries over a five-account
/// chart: (debit account index, credit account index, cents, day of March).
fn balanced_batch_strategy() -> impl Strategy<Value = Vec<(usize, usize, i64, u32)>> {
    prop::collection::vec((0usize..5, 0usize..5, 1i64..10_000_000, 1u32..=28), 1..25)
}

fn build_entries(chart: &Chart, batch: &[(usize, usize, i64, u32)]) -> Vec<JournalEntry> {
    let accounts = chart.accounts();
    batch
        .iter()
        .enumerate()
        .map(|(i, &(d, c, cents, day))| {
            let amount = Decimal::new(cents, 2);
            entry(
                u32::try_from(i).expect("batch fits in u32") + 1,
                date(2026, 3, day),
                vec![
                    debit(accounts[d].id, amount),
                    credit(accounts[c].id, amount),
                ],
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any set of balanced entries the trial balance is balanced and
    /// its totals both equal the sum of all entry amounts.
    #[test]
    fn prop_trial_balance_balanced_for_balanced_entries(batch in balanced_batch_strategy()) {
        let chart = Chart::new();
        let entries = build_entries(&chart, &batch);
        let expected: Decimal = batch.iter().map(|&(_, _, cents, _)| Decimal::new(cents, 2)).sum();

        let report = ReportService::trial_balance(&chart.accounts(), &entries, "ARS");
        prop_assert!(report.totals.is_balanced);
        prop_assert_eq!(report.totals.debit_total, expected);
        prop_assert_eq!(report.totals.credit_total, expected);
    }

    /// For any set of balanced entries the balance sheet balances:
    /// assets == liabilities + equity + period result.
    #[test]
    fn prop_balance_sheet_balances_for_balanced_entries(batch in balanced_batch_strategy()) {
        let chart = Chart::new();
        let entries = build_entries(&chart, &batch);

        let report = ReportService::balance_sheet(&chart.accounts(), &entries, "ARS");
        prop_assert!(report.is_balanced);
        prop_assert_eq!(report.assets, report.liabilities_and_equity);
    }

    /// The final running balance of an account ledger equals the signed sum
    /// of all its lines, independent of posting order.
    #[test]
    fn prop_account_ledger_final_balance(batch in balanced_batch_strategy()) {
        let chart = Chart::new();
        let entries = build_entries(&chart, &batch);
        let caja = chart.caja.id;

        let expected: Decimal = entries
            .iter()
            .flat_map(|e| e.lines.iter())
            .filter(|l| l.account_id == caja)
            .map(EntryLine::signed_amount)
            .sum();

        let ledger = ReportService::account_ledger(caja, &entries);
        prop_assert_eq!(ledger.balance, expected);
        if let Some(last) = ledger.movements.last() {
            prop_assert_eq!(last.running_balance, ledger.balance);
        }
    }
}
