//! Income report types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Completed income for a single year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearIncome {
    /// Calendar year.
    pub year: i32,
    /// Sum of the year's charges.
    pub total: Decimal,
    /// Number of completed rentals charged in the year.
    pub rentals: usize,
}

/// Completed income broken down by year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeReport {
    /// Per-year totals, oldest year first.
    pub years: Vec<YearIncome>,
    /// Sum over all years.
    pub total: Decimal,
}
