//! Locale utilities for amounts entered and displayed as text.

pub mod decimal;

pub use decimal::{format_decimal, parse_decimal};
