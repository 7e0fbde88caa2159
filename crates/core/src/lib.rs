//! Core business logic for Scootr.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! Rental pricing, the income ledger, and the rental lifecycle live here.
//!
//! # Modules
//!
//! - `pricing` - Per-minute pricing with a daily cap
//! - `ledger` - Year-indexed income ledger
//! - `accounting` - Pricing, income reports, and active-rental projections
//! - `inventory` - Scooter registry and lookup
//! - `rental` - Rental lifecycle controller

pub mod accounting;
pub mod inventory;
pub mod ledger;
pub mod pricing;
pub mod rental;

pub use accounting::AccountingService;
pub use inventory::{Scooter, ScooterInventory, ScooterService};
pub use ledger::IncomeLedger;
pub use pricing::PricingEngine;
pub use rental::{Clock, RentalCompany, RentalError, SystemClock};
