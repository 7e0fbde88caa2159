//! Rental lifecycle.
//!
//! A scooter is either available or rented. Starting a rental captures the
//! scooter's price per minute; ending it prices the rental, records the
//! charge in the income ledger under the year the rental ended, and makes
//! the scooter available again.

pub mod clock;
pub mod company;
pub mod error;
pub mod types;


pub use clock::{Clock, ManualClock, SystemClock};
pub use company::RentalCompany;
pub use error::RentalError;
pub use types::{ActiveRental, CompletedRental, IncomePolicy};
