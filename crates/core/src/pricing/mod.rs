//! Rental pricing with a per-day price cap.
//!
//! A rental is charged per minute. Every calendar day it touches is charged
//! separately and capped, so that no single day costs more than the daily cap.

pub mod engine;
pub mod error;

#[cfg(test)]
mod engine_props;

pub use engine::{
    DEFAULT_DAILY_CAP, MINUTES_PER_DAY, PriceBreakdown, PricingEngine, cap_at_max,
    minutes_between,
};
pub use error::PricingError;
