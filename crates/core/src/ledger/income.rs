//! Append-only income ledger keyed by year.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Year-indexed record of finalized rental charges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncomeLedger {
    entries: BTreeMap<i32, Vec<Decimal>>,
}

impl IncomeLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger from previously recorded income.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NegativeAmount` if any entry is negative.
    pub fn from_history(history: BTreeMap<i32, Vec<Decimal>>) -> Result<Self, LedgerError> {
        if let Some(amount) = history
            .values()
            .flatten()
            .find(|amount| **amount < Decimal::ZERO)
        {
            return Err(LedgerError::NegativeAmount(*amount));
        }
        Ok(Self { entries: history })
    }

    /// Appends an amount to the year's entries, creating the year if absent.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NegativeAmount` if `amount` is negative.
    pub fn record_income(&mut self, year: i32, amount: Decimal) -> Result<(), LedgerError> {
        Self::check_amount(amount)?;
        self.entries.entry(year).or_default().push(amount);
        tracing::debug!(year, %amount, "income recorded");
        Ok(())
    }

    /// Validates an amount without recording it.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NegativeAmount` if `amount` is negative.
    pub fn check_amount(amount: Decimal) -> Result<(), LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount(amount));
        }
        Ok(())
    }

    /// Total income for one year, or for all years if `year` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::UnknownYear` if a year is given that has no entries.
    pub fn total_income(&self, year: Option<i32>) -> Result<Decimal, LedgerError> {
        match year {
            None => Ok(self.entries.values().flatten().copied().sum()),
            Some(year) => self
                .entries
                .get(&year)
                .map(|amounts| amounts.iter().copied().sum())
                .ok_or(LedgerError::UnknownYear(year)),
        }
    }

    /// Returns true if income has been recorded for `year`.
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        self.entries.contains_key(&year)
    }

    /// Years with recorded income, in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.keys().copied()
    }

    /// Entries recorded for `year`, in insertion order.
    #[must_use]
    pub fn entries(&self, year: i32) -> &[Decimal] {
        self.entries.get(&year).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of entries across all years.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Returns true if no income has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
