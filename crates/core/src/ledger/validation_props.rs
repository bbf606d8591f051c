//! Property-based tests for journal entry validation.

use partida_shared::types::AccountId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::LineInput;
use super::validation::validate_lines;

fn debit_line(amount: Decimal) -> LineInput {
    LineInput {
        account_id: AccountId::new(),
        debit: amount,
        credit: Decimal::ZERO,
    }
}

fn credit_line(amount: Decimal) -> LineInput {
    LineInput {
        account_id: AccountId::new(),
        debit: Decimal::ZERO,
        credit: amount,
    }
}

/// Strategy for positive two-decimal amounts.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a list of debit amounts.
fn debit_amounts_strategy() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(amount_strategy(), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any line set whose debit and credit totals are exactly equal,
    /// validation succeeds and reports those totals.
    #[test]
    fn prop_exactly_balanced_lines_validate(debits in debit_amounts_strategy()) {
        let total: Decimal = debits.iter().copied().sum();
        let mut lines: Vec<LineInput> = debits.into_iter().map(debit_line).collect();
        lines.push(credit_line(total));

        let validated = validate_lines(&lines).expect("balanced lines must validate");
        prop_assert_eq!(validated.totals.debit, total);
        prop_assert_eq!(validated.totals.credit, total);
        prop_assert!(validated.totals.is_balanced);
    }

    /// For any line set whose totals differ by more than the tolerance,
    /// validation fails with `Unbalanced` carrying the difference.
    #[test]
    fn prop_unbalanced_lines_rejected(
        debits in debit_amounts_strategy(),
        excess_mills in 6i64..1_000_000i64,
    ) {
        let total: Decimal = debits.iter().copied().sum();
        let excess = Decimal::new(excess_mills, 3); // > 0.005
        let mut lines: Vec<LineInput> = debits.into_iter().map(debit_line).collect();
        lines.push(credit_line(total + excess));

        match validate_lines(&lines) {
            Err(LedgerError::Unbalanced { difference, .. }) => {
                prop_assert_eq!(difference, excess);
            }
            other => prop_assert!(false, "expected Unbalanced, got {other:?}"),
        }
    }

    /// Differences up to and including the tolerance are accepted.
    #[test]
    fn prop_difference_within_tolerance_accepted(
        amount in amount_strategy(),
        slack_mills in 0i64..=5i64,
    ) {
        let slack = Decimal::new(slack_mills, 3); // <= 0.005
        let lines = vec![debit_line(amount + slack), credit_line(amount)];
        prop_assert!(validate_lines(&lines).is_ok());
    }

    /// Blank rows never change the outcome of validation.
    #[test]
    fn prop_blank_rows_are_inert(debits in debit_amounts_strategy()) {
        let total: Decimal = debits.iter().copied().sum();
        let mut lines: Vec<LineInput> = debits.into_iter().map(debit_line).collect();
        lines.push(credit_line(total));

        let without_blanks = validate_lines(&lines).expect("balanced lines must validate");

        lines.insert(
            0,
            LineInput {
                account_id: AccountId::new(),
                debit: Decimal::ZERO,
                credit: Decimal::ZERO,
            },
        );
        let with_blanks = validate_lines(&lines).expect("blank rows must be dropped");

        prop_assert_eq!(with_blanks.lines.len(), without_blanks.lines.len());
        prop_assert_eq!(with_blanks.totals.debit, without_blanks.totals.debit);
        prop_assert_eq!(with_blanks.totals.credit, without_blanks.totals.credit);
    }

    /// Normalized lines preserve input order and per-line amounts.
    #[test]
    fn prop_normalization_preserves_amounts(debits in debit_amounts_strategy()) {
        let total: Decimal = debits.iter().copied().sum();
        let mut lines: Vec<LineInput> = debits.iter().copied().map(debit_line).collect();
        lines.push(credit_line(total));

        let validated = validate_lines(&lines).expect("balanced lines must validate");
        for (line, expected) in validated.lines.iter().zip(debits.iter()) {
            prop_assert_eq!(line.amount, *expected);
        }
    }
}
