//! Inventory error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Inventory-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Scooter id is empty.
    #[error("Id cannot be null or empty")]
    InvalidId,

    /// No scooter with this id is registered.
    #[error("Scooter with id {0} doesn't exist")]
    ScooterNotFound(String),

    /// A scooter with this id is already registered.
    #[error("Scooter with id {0} already exists")]
    DuplicateScooter(String),

    /// Price per minute must be positive.
    #[error("Price per minute must be positive, got {0}")]
    InvalidPrice(Decimal),

    /// Scooter is rented and cannot be removed.
    #[error("Scooter with id {0} is in rent and cannot be removed")]
    ScooterInUse(String),
}
