//! Shared configuration, errors, and telemetry for Scootr.
//!
//! This crate provides the ambient pieces used by the rental core and by
//! any application embedding it:
//! - Application configuration (pricing cap, income reporting policy)
//! - Application-wide error envelope
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppConfig, PricingConfig, ReportingConfig};
pub use error::{AppError, AppResult};
