//! Property-based tests for the pricing engine.
//!
//! - Property 1: Daily cap is never exceeded
//! - Property 2: Splitting at midnight is additive
//! - Property 3: Price is non-negative and non-decreasing in the end time

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::{DEFAULT_DAILY_CAP, PricingEngine};

/// Strategy to generate rates from 0.01 to 5.00 per minute.
fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..=500i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate whole-minute start times within four years.
fn start_time() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..4 * 365 * 1440).prop_map(|minutes| {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_time(NaiveTime::MIN)
            + Duration::minutes(minutes)
    })
}

/// Strategy to generate rental lengths up to ten days.
fn rental_minutes() -> impl Strategy<Value = i64> {
    0i64..10 * 1440
}

/// Number of calendar days an interval touches.
fn days_touched(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end.date() - start.date()).num_days() + 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 1.1: No single day's charge exceeds the cap.
    #[test]
    fn prop_no_day_exceeds_cap(
        rate in rate(),
        start in start_time(),
        minutes in rental_minutes(),
    ) {
        let end = start + Duration::minutes(minutes);
        let breakdown = PricingEngine::default().breakdown(rate, start, end).unwrap();

        prop_assert!(breakdown.max_day_charge() <= DEFAULT_DAILY_CAP);
    }

    /// Property 1.2: Total price is bounded by cap times days touched.
    #[test]
    fn prop_total_bounded_by_days_touched(
        rate in rate(),
        start in start_time(),
        minutes in rental_minutes(),
    ) {
        let end = start + Duration::minutes(minutes);
        let price = PricingEngine::default().calculate_total_price(rate, start, end).unwrap();

        prop_assert!(price <= DEFAULT_DAILY_CAP * Decimal::from(days_touched(start, end)));
    }

    /// Property 2: Price over an interval equals the sum of prices of its
    /// parts when split at any midnight inside the interval.
    #[test]
    fn prop_split_at_midnight_is_additive(
        rate in rate(),
        start in start_time(),
        minutes in 1440i64..10 * 1440,
        split in 1i64..10,
    ) {
        let engine = PricingEngine::default();
        let end = start + Duration::minutes(minutes);
        let span_days = (end.date() - start.date()).num_days();
        prop_assume!(span_days >= 1);

        let split_day = 1 + (split - 1) % span_days;
        let midnight = (start.date() + Duration::days(split_day)).and_time(NaiveTime::MIN);

        let whole = engine.calculate_total_price(rate, start, end).unwrap();
        let left = engine.calculate_total_price(rate, start, midnight).unwrap();
        let right = engine.calculate_total_price(rate, midnight, end).unwrap();

        prop_assert_eq!(whole, left + right);
    }

    /// Property 3.1: Price is never negative.
    #[test]
    fn prop_price_non_negative(
        rate in rate(),
        start in start_time(),
        minutes in rental_minutes(),
    ) {
        let end = start + Duration::minutes(minutes);
        let price = PricingEngine::default().calculate_total_price(rate, start, end).unwrap();

        prop_assert!(price >= Decimal::ZERO);
    }

    /// Property 3.2: Extending a rental never makes it cheaper.
    #[test]
    fn prop_price_monotonic_in_end(
        rate in rate(),
        start in start_time(),
        minutes in rental_minutes(),
        extra in 0i64..3 * 1440,
    ) {
        let engine = PricingEngine::default();
        let end = start + Duration::minutes(minutes);
        let later = end + Duration::minutes(extra);

        let price = engine.calculate_total_price(rate, start, end).unwrap();
        let later_price = engine.calculate_total_price(rate, start, later).unwrap();

        prop_assert!(price <= later_price);
    }
}
