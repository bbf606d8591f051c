//! Chart of accounts.
//!
//! Accounts carry a category that determines their normal balance side and
//! the subcategories they may be filed under.

pub mod error;
pub mod types;

pub use error::AccountError;
pub use types::{Account, AccountCategory, NewAccount, NormalBalance};
