//! Scooter inventory.
//!
//! The rental lifecycle only needs to look scooters up by id; the
//! [`ScooterInventory`] trait is that seam. [`ScooterService`] is the
//! in-memory implementation with registration and removal.

pub mod error;
pub mod scooter;
pub mod service;
pub mod validation;

pub use error::InventoryError;
pub use scooter::Scooter;
pub use service::{ScooterInventory, ScooterService};
pub use validation::{validate_price, validate_scooter_id};
