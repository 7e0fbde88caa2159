//! Property-based tests for the income ledger.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::income::IncomeLedger;

/// Strategy to generate non-negative amounts (0.00 to 1,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    /// Two appends to the same year sum to the year's total.
    #[test]
    fn prop_year_total_is_sum_of_appends(
        year in 1990i32..2100,
        a in amount(),
        b in amount(),
    ) {
        let mut ledger = IncomeLedger::new();
        ledger.record_income(year, a).unwrap();
        ledger.record_income(year, b).unwrap();

        prop_assert_eq!(ledger.total_income(Some(year)).unwrap(), a + b);
    }

    /// The all-years total equals the sum of every year's total.
    #[test]
    fn prop_all_years_total_is_sum_over_years(
        entries in prop::collection::vec((2000i32..2010, amount()), 0..50),
    ) {
        let mut ledger = IncomeLedger::new();
        for (year, amount) in &entries {
            ledger.record_income(*year, *amount).unwrap();
        }

        let by_year: Decimal = ledger
            .years()
            .map(|year| ledger.total_income(Some(year)).unwrap())
            .sum();
        let expected: Decimal = entries.iter().map(|(_, amount)| *amount).sum();

        prop_assert_eq!(ledger.total_income(None).unwrap(), by_year);
        prop_assert_eq!(by_year, expected);
        prop_assert_eq!(ledger.entry_count(), entries.len());
    }
}
