//! Rental domain types.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use scootr_shared::ReportingConfig;
use serde::{Deserialize, Serialize};

/// A rental that has started and not yet ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRental {
    /// Rented scooter.
    pub scooter_id: String,
    /// When the rental started.
    pub start_time: NaiveDateTime,
    /// When the rental ended; `None` while in progress.
    pub end_time: Option<NaiveDateTime>,
    /// Price per minute captured when the rental started.
    pub price_per_minute: Decimal,
}

impl ActiveRental {
    /// Creates an in-progress rental.
    #[must_use]
    pub fn new(
        scooter_id: impl Into<String>,
        start_time: NaiveDateTime,
        price_per_minute: Decimal,
    ) -> Self {
        Self {
            scooter_id: scooter_id.into(),
            start_time,
            end_time: None,
            price_per_minute,
        }
    }

    /// Returns true while the rental has no end time.
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        self.end_time.is_none()
    }

    /// Closes the rental at `end_time` with its final price.
    #[must_use]
    pub fn complete(self, end_time: NaiveDateTime, total_price: Decimal) -> CompletedRental {
        CompletedRental {
            scooter_id: self.scooter_id,
            start_time: self.start_time,
            end_time,
            price_per_minute: self.price_per_minute,
            total_price,
        }
    }
}

/// A finished rental with its final charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedRental {
    /// Rented scooter.
    pub scooter_id: String,
    /// When the rental started.
    pub start_time: NaiveDateTime,
    /// When the rental ended.
    pub end_time: NaiveDateTime,
    /// Price per minute captured when the rental started.
    pub price_per_minute: Decimal,
    /// Final charge.
    pub total_price: Decimal,
}

impl CompletedRental {
    /// Ledger year of this rental, taken from its end time.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.end_time.year()
    }
}

/// How active rentals contribute to income reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomePolicy {
    /// Project active rentals into single-year reports as well.
    ///
    /// When `false`, active rentals are only projected into the all-years
    /// total and a year filter silently excludes them.
    pub include_active_for_year: bool,
}

impl IncomePolicy {
    /// Creates a policy from loaded configuration.
    #[must_use]
    pub const fn from_config(config: &ReportingConfig) -> Self {
        Self {
            include_active_for_year: config.include_active_for_year,
        }
    }
}
