//! The journal aggregate.
//!
//! Owns the chart of accounts and the posted entries, and is the single
//! sequencing point for mutation: callers hold one `&mut Journal` per book,
//! so two balancing submissions can never interleave. Reports read immutable
//! snapshots via [`accounts`](Journal::accounts) and
//! [`entries`](Journal::entries).

use std::cmp::Reverse;

use partida_shared::types::{AccountId, JournalEntryId};
use tracing::info;

use super::error::LedgerError;
use super::types::{EntryLine, JournalEntry, NewJournalEntry};
use super::validation::validate_lines;
use crate::account::{Account, NewAccount};

/// In-memory journal: chart of accounts plus posted entries.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    accounts: Vec<Account>,
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the chart of accounts.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Returns all posted entries in posting order.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Looks up an account by id.
    #[must_use]
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Looks up a posted entry by id.
    #[must_use]
    pub fn entry(&self, id: JournalEntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Adds an account to the chart of accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the definition is invalid or the code is already
    /// taken.
    pub fn add_account(&mut self, new: NewAccount) -> Result<AccountId, LedgerError> {
        new.validate()?;
        if self.accounts.iter().any(|a| a.code == new.code) {
            return Err(LedgerError::DuplicateAccountCode(new.code));
        }

        let id = AccountId::new();
        info!(%id, code = %new.code, category = %new.category, "Account added");
        self.accounts.push(Account {
            id,
            code: new.code,
            name: new.name,
            category: new.category,
            subcategory: new.subcategory,
        });
        Ok(id)
    }

    /// Removes an account that no posted entry references.
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist or is referenced by
    /// posted entries.
    pub fn remove_account(&mut self, id: AccountId) -> Result<(), LedgerError> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or(LedgerError::AccountNotFound(id))?;
        if self.is_account_referenced(id) {
            return Err(LedgerError::AccountInUse(id));
        }
        self.accounts.remove(index);
        info!(%id, "Account removed");
        Ok(())
    }

    /// Validates and posts a new journal entry, assigning the next
    /// sequential number.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines do not validate or reference an unknown
    /// account.
    pub fn post_entry(&mut self, new: NewJournalEntry) -> Result<JournalEntryId, LedgerError> {
        let validated = validate_lines(&new.lines)?;
        self.check_accounts_exist(&validated.lines)?;

        let id = JournalEntryId::new();
        let number = self.next_number();
        info!(
            %id,
            number,
            date = %new.date,
            debit = %validated.totals.debit,
            credit = %validated.totals.credit,
            "Journal entry posted"
        );
        self.entries.push(JournalEntry {
            id,
            number,
            date: new.date,
            memo: new.memo,
            lines: validated.lines,
        });
        Ok(id)
    }

    /// Replaces a posted entry wholesale, preserving its id and number.
    ///
    /// Posted entries are never edited in place; an edit re-validates the
    /// replacement and swaps the whole entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist, or the replacement does
    /// not validate.
    pub fn replace_entry(
        &mut self,
        id: JournalEntryId,
        new: NewJournalEntry,
    ) -> Result<(), LedgerError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::EntryNotFound(id))?;
        let validated = validate_lines(&new.lines)?;
        self.check_accounts_exist(&validated.lines)?;

        let number = self.entries[index].number;
        info!(%id, number, "Journal entry replaced");
        self.entries[index] = JournalEntry {
            id,
            number,
            date: new.date,
            memo: new.memo,
            lines: validated.lines,
        };
        Ok(())
    }

    /// Removes a posted entry by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist.
    pub fn remove_entry(&mut self, id: JournalEntryId) -> Result<(), LedgerError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::EntryNotFound(id))?;
        self.entries.remove(index);
        info!(%id, "Journal entry removed");
        Ok(())
    }

    /// Returns up to `limit` entries, newest first (date desc, number desc).
    #[must_use]
    pub fn recent_entries(&self, limit: usize) -> Vec<&JournalEntry> {
        let mut recent: Vec<&JournalEntry> = self.entries.iter().collect();
        recent.sort_by_key(|e| Reverse((e.date, e.number)));
        recent.truncate(limit);
        recent
    }

    /// Returns true if any posted entry references the account.
    #[must_use]
    pub fn is_account_referenced(&self, id: AccountId) -> bool {
        self.entries
            .iter()
            .any(|e| e.lines.iter().any(|l| l.account_id == id))
    }

    fn check_accounts_exist(&self, lines: &[EntryLine]) -> Result<(), LedgerError> {
        for line in lines {
            if self.account(line.account_id).is_none() {
                return Err(LedgerError::AccountNotFound(line.account_id));
            }
        }
        Ok(())
    }

    fn next_number(&self) -> u32 {
        self.entries.iter().map(|e| e.number).max().unwrap_or(0) + 1
    }
}
