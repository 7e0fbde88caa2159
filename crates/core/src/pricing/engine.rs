//! Pricing engine for time-based rentals.

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use scootr_shared::PricingConfig;
use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Number of minutes in a full calendar day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Default maximum charge for one calendar day (20.00).
pub const DEFAULT_DAILY_CAP: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Decimal places of a final price.
const PRICE_SCALE: u32 = 2;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Returns `price`, or `cap` if the price exceeds it.
///
/// No single day of rental may cost more than the cap.
#[must_use]
pub fn cap_at_max(price: Decimal, cap: Decimal) -> Decimal {
    price.min(cap)
}

/// Capped charge for `minutes` at `price_per_minute`.
///
/// A product too large for `Decimal` is over any cap.
fn capped_charge(minutes: Decimal, price_per_minute: Decimal, cap: Decimal) -> Decimal {
    minutes
        .checked_mul(price_per_minute)
        .map_or(cap, |price| cap_at_max(price, cap))
}

/// Returns the elapsed minutes between two instants, including fractions.
#[must_use]
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    Decimal::from((end - start).num_milliseconds()) / Decimal::from(MILLIS_PER_MINUTE)
}

/// Per-day components of a rental price, before rounding.
///
/// Every component is already capped at the daily cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Charge for the day the rental started.
    pub first_day: Decimal,
    /// Charge for the day the rental ended, if different from the first day.
    pub last_day: Option<Decimal>,
    /// Charge for each full day between the first and the last day.
    pub full_day: Decimal,
    /// Number of full days strictly between the first and the last day.
    pub full_days: i64,
}

impl PriceBreakdown {
    /// Sum of all components, rounded to 2 decimal places.
    ///
    /// Rounding is applied once to the aggregate, using banker's rounding.
    #[must_use]
    pub fn total(&self) -> Decimal {
        let sum = self.first_day
            + self.last_day.unwrap_or(Decimal::ZERO)
            + self.full_day * Decimal::from(self.full_days);
        sum.round_dp(PRICE_SCALE)
    }

    /// Largest single-day charge in this breakdown.
    #[must_use]
    pub fn max_day_charge(&self) -> Decimal {
        let mut max = self.first_day;
        if let Some(last_day) = self.last_day {
            max = max.max(last_day);
        }
        if self.full_days > 0 {
            max = max.max(self.full_day);
        }
        max
    }
}

/// Computes rental prices under a daily price cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingEngine {
    daily_cap: Decimal,
}

impl PricingEngine {
    /// Creates an engine with the given daily cap.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::NonPositiveCap` if `daily_cap <= 0`.
    pub fn new(daily_cap: Decimal) -> Result<Self, PricingError> {
        if daily_cap <= Decimal::ZERO {
            return Err(PricingError::NonPositiveCap(daily_cap));
        }
        Ok(Self { daily_cap })
    }

    /// Creates an engine from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::NonPositiveCap` if the configured cap is not positive.
    pub fn from_config(config: &PricingConfig) -> Result<Self, PricingError> {
        Self::new(config.daily_cap)
    }

    /// Returns the daily cap.
    #[must_use]
    pub const fn daily_cap(&self) -> Decimal {
        self.daily_cap
    }

    /// Calculates the total price of renting from `start` to `end`.
    ///
    /// If both instants fall on the same calendar day, the price is the
    /// capped per-minute charge. Otherwise the rental is split at midnight:
    /// the first partial day, the last partial day, and every full day in
    /// between are capped separately and summed.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::NonPositiveRate` if `price_per_minute <= 0`.
    /// Returns `PricingError::InvertedInterval` if `end` is before `start`.
    pub fn calculate_total_price(
        &self,
        price_per_minute: Decimal,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Decimal, PricingError> {
        Ok(self.breakdown(price_per_minute, start, end)?.total())
    }

    /// Splits the price of a rental into capped per-day components.
    ///
    /// # Errors
    ///
    /// Same as [`PricingEngine::calculate_total_price`].
    pub fn breakdown(
        &self,
        price_per_minute: Decimal,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<PriceBreakdown, PricingError> {
        if price_per_minute <= Decimal::ZERO {
            return Err(PricingError::NonPositiveRate(price_per_minute));
        }
        if end < start {
            return Err(PricingError::InvertedInterval { start, end });
        }

        let full_day = capped_charge(
            Decimal::from(MINUTES_PER_DAY),
            price_per_minute,
            self.daily_cap,
        );

        let start_date = start.date();
        let end_date = end.date();

        if start_date == end_date {
            return Ok(PriceBreakdown {
                first_day: capped_charge(
                    minutes_between(start, end),
                    price_per_minute,
                    self.daily_cap,
                ),
                last_day: None,
                full_day,
                full_days: 0,
            });
        }

        let start_midnight = start_date.and_time(NaiveTime::MIN);
        let end_midnight = end_date.and_time(NaiveTime::MIN);

        let first_day_minutes =
            Decimal::from(MINUTES_PER_DAY) - minutes_between(start_midnight, start);
        let last_day_minutes = minutes_between(end_midnight, end);

        Ok(PriceBreakdown {
            first_day: capped_charge(first_day_minutes, price_per_minute, self.daily_cap),
            last_day: Some(capped_charge(
                last_day_minutes,
                price_per_minute,
                self.daily_cap,
            )),
            full_day,
            full_days: (end_date - start_date).num_days() - 1,
        })
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self {
            daily_cap: DEFAULT_DAILY_CAP,
        }
    }
}
