//! Scooter domain type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rentable scooter.
///
/// The price per minute is fixed at registration. The rented flag is only
/// changed by the rental lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scooter {
    id: String,
    price_per_minute: Decimal,
    is_rented: bool,
}

impl Scooter {
    /// Creates an available scooter.
    #[must_use]
    pub fn new(id: impl Into<String>, price_per_minute: Decimal) -> Self {
        Self {
            id: id.into(),
            price_per_minute,
            is_rented: false,
        }
    }

    /// Unique scooter id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Price charged per minute of rental.
    #[must_use]
    pub const fn price_per_minute(&self) -> Decimal {
        self.price_per_minute
    }

    /// Returns true while the scooter is rented.
    #[must_use]
    pub const fn is_rented(&self) -> bool {
        self.is_rented
    }

    pub(crate) fn set_rented(&mut self, rented: bool) {
        self.is_rented = rented;
    }
}
