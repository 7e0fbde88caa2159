//! Rental lifecycle error types.

use scootr_shared::AppError;
use thiserror::Error;

use crate::inventory::InventoryError;
use crate::ledger::LedgerError;
use crate::pricing::PricingError;

/// Rental lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
    /// Company name is empty.
    #[error("Company name cannot be null or empty")]
    InvalidName,

    /// Scooter is already rented.
    #[error("Scooter with id {0} is already in rent")]
    AlreadyRented(String),

    /// Scooter is not rented.
    #[error("Scooter with id {0} was not rented")]
    NotRented(String),

    /// Scooter lookup failed.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Income ledger rejected the operation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Rental could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl From<RentalError> for AppError {
    fn from(err: RentalError) -> Self {
        let message = err.to_string();
        match err {
            RentalError::InvalidName
            | RentalError::Inventory(InventoryError::InvalidId | InventoryError::InvalidPrice(_))
            | RentalError::Pricing(_) => Self::Validation(message),
            RentalError::Inventory(InventoryError::ScooterNotFound(_))
            | RentalError::Ledger(LedgerError::UnknownYear(_)) => Self::NotFound(message),
            RentalError::AlreadyRented(_)
            | RentalError::NotRented(_)
            | RentalError::Inventory(
                InventoryError::DuplicateScooter(_) | InventoryError::ScooterInUse(_),
            ) => Self::Conflict(message),
            RentalError::Ledger(LedgerError::NegativeAmount(_)) => Self::BusinessRule(message),
        }
    }
}
