//! Rental accounting: pricing, income reports, and projections.

pub mod service;
pub mod types;

pub use service::AccountingService;
pub use types::{IncomeReport, YearIncome};
