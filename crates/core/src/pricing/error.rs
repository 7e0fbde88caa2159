//! Pricing error types.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// Pricing-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Rental interval ends before it starts.
    #[error("Invalid rental interval: end {end} is before start {start}")]
    InvertedInterval {
        /// Start of the interval.
        start: NaiveDateTime,
        /// End of the interval.
        end: NaiveDateTime,
    },

    /// Price per minute must be positive.
    #[error("Price per minute must be positive, got {0}")]
    NonPositiveRate(Decimal),

    /// Daily cap must be positive.
    #[error("Daily cap must be positive, got {0}")]
    NonPositiveCap(Decimal),
}
