//! Accounting service over the income ledger and pricing engine.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::types::{IncomeReport, YearIncome};
use crate::ledger::{IncomeLedger, LedgerError};
use crate::pricing::{PricingEngine, PricingError};
use crate::rental::{ActiveRental, CompletedRental};

/// Prices rentals and reports income.
///
/// Owns the income ledger; the only write path is [`AccountingService::record_completed`].
#[derive(Debug, Clone, Default)]
pub struct AccountingService {
    ledger: IncomeLedger,
    pricing: PricingEngine,
}

impl AccountingService {
    /// Creates a service over an existing ledger.
    #[must_use]
    pub const fn new(ledger: IncomeLedger, pricing: PricingEngine) -> Self {
        Self { ledger, pricing }
    }

    /// Prices a rental between `start` and `end` at its captured rate.
    ///
    /// # Errors
    ///
    /// Returns a `PricingError` if the interval is inverted or the rate is
    /// not positive.
    pub fn calculate_total_price(
        &self,
        rental: &ActiveRental,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Decimal, PricingError> {
        self.pricing
            .calculate_total_price(rental.price_per_minute, start, end)
    }

    /// Completed income for `year`, or for all years if `None`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::UnknownYear` if the year has no recorded income.
    pub fn get_report(&self, year: Option<i32>) -> Result<Decimal, LedgerError> {
        self.ledger.total_income(year)
    }

    /// Income the in-progress rentals would bring if they all ended at `now`.
    ///
    /// Rentals that already have an end time are skipped. Nothing is
    /// written to the ledger.
    ///
    /// # Errors
    ///
    /// Returns a `PricingError` if a rental started after `now`.
    pub fn projected_active_income(
        &self,
        rentals: &[ActiveRental],
        now: NaiveDateTime,
    ) -> Result<Decimal, PricingError> {
        let projected = rentals
            .iter()
            .filter(|rental| rental.is_in_progress())
            .map(|rental| self.calculate_total_price(rental, rental.start_time, now))
            .sum::<Result<Decimal, _>>()?;

        tracing::debug!(rentals = rentals.len(), %projected, "projected active income");
        Ok(projected)
    }

    /// Records the final charge of a completed rental under its end year.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NegativeAmount` if the charge is negative.
    pub fn record_completed(&mut self, rental: &CompletedRental) -> Result<(), LedgerError> {
        self.ledger.record_income(rental.year(), rental.total_price)
    }

    /// Completed income for every year with recorded income.
    #[must_use]
    pub fn yearly_report(&self) -> IncomeReport {
        let years: Vec<YearIncome> = self
            .ledger
            .years()
            .map(|year| {
                let entries = self.ledger.entries(year);
                YearIncome {
                    year,
                    total: entries.iter().copied().sum(),
                    rentals: entries.len(),
                }
            })
            .collect();
        let total = years.iter().map(|y| y.total).sum();

        IncomeReport { years, total }
    }

    /// The underlying ledger.
    #[must_use]
    pub const fn ledger(&self) -> &IncomeLedger {
        &self.ledger
    }

    /// The pricing engine used for every charge.
    #[must_use]
    pub const fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }
}
