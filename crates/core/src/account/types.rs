//! Chart of accounts domain types.

use partida_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::AccountError;

/// Account category in the chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    /// Asset account.
    Asset,
    /// Liability account.
    Liability,
    /// Equity account.
    Equity,
    /// Revenue account.
    Revenue,
    /// Expense account.
    Expense,
}

impl AccountCategory {
    /// Returns the side on which this category normally carries its balance.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::Credit,
        }
    }

    /// Returns true for categories reported on the balance sheet.
    #[must_use]
    pub const fn is_balance_sheet(self) -> bool {
        matches!(self, Self::Asset | Self::Liability | Self::Equity)
    }

    /// Standard subcategories for this category.
    #[must_use]
    pub const fn subcategories(self) -> &'static [&'static str] {
        match self {
            Self::Asset => &["current_asset", "non_current_asset", "other_asset"],
            Self::Liability => &["current_liability", "non_current_liability", "other_liability"],
            Self::Equity => &["capital", "retained_earnings", "current_year_result"],
            Self::Revenue => &["sales", "other_income"],
            Self::Expense => &[
                "cost_of_sales",
                "administrative_expense",
                "selling_expense",
                "financial_expense",
                "other_expense",
            ],
        }
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for AccountCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown account category: {s}")),
        }
    }
}

/// Normal balance side of an account category.
///
/// - Debit-normal: debits increase the balance (Asset, Expense)
/// - Credit-normal: credits increase the balance (Liability, Equity, Revenue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debit-normal accounts.
    Debit,
    /// Credit-normal accounts.
    Credit,
}

impl NormalBalance {
    /// Signed balance contribution of a (debit, credit) pair for this side.
    #[must_use]
    pub fn signed(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

/// A chart of accounts entry.
///
/// Immutable once referenced by posted entries; the journal aggregate
/// enforces this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Account code (e.g., "1.1.01").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Account category.
    pub category: AccountCategory,
    /// Optional subcategory from the category's catalog.
    pub subcategory: Option<String>,
}

/// Input for creating a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Account code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Account category.
    pub category: AccountCategory,
    /// Optional subcategory from the category's catalog.
    pub subcategory: Option<String>,
}

impl NewAccount {
    /// Validates the input against the chart of accounts rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the code or name is blank, or if the subcategory
    /// does not belong to the category's catalog.
    pub fn validate(&self) -> Result<(), AccountError> {
        if self.code.trim().is_empty() {
            return Err(AccountError::EmptyCode);
        }
        if self.name.trim().is_empty() {
            return Err(AccountError::EmptyName);
        }
        if let Some(sub) = &self.subcategory {
            if !self.category.subcategories().contains(&sub.as_str()) {
                return Err(AccountError::UnknownSubcategory {
                    category: self.category,
                    subcategory: sub.clone(),
                });
            }
        }
        Ok(())
    }
}
