//! Year-indexed income ledger.
//!
//! Finalized rental charges are appended under the year the rental ended.
//! Entries are never edited or removed, so the sum of a year's entries is
//! the completed income for that year.

pub mod error;
pub mod income;

#[cfg(test)]
mod income_props;

pub use error::LedgerError;
pub use income::IncomeLedger;
