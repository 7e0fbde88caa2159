//! Ledger error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No income has been recorded for the requested year.
    #[error("Year {0} is not in the ledger")]
    UnknownYear(i32),

    /// Income entries cannot be negative.
    #[error("Income amount cannot be negative: {0}")]
    NegativeAmount(Decimal),
}
