//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Pricing configuration.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Income reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Pricing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Maximum chargeable amount for a single calendar day of rental.
    #[serde(default = "default_daily_cap")]
    pub daily_cap: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            daily_cap: default_daily_cap(),
        }
    }
}

// Kept equal to `scootr_core::pricing::DEFAULT_DAILY_CAP`.
fn default_daily_cap() -> Decimal {
    Decimal::from(20)
}

/// Income reporting configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportingConfig {
    /// Add projected income of active rentals to single-year reports.
    ///
    /// Off by default: active rentals are only projected into the
    /// all-years total.
    #[serde(default)]
    pub include_active_for_year: bool,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `.env`, `config/default`, `config/{RUN_MODE}`, `SCOOTR__*` variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if configuration cannot be loaded
    /// or fails validation.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SCOOTR").separator("__"))
            .build()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks business constraints the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if the daily cap is not positive.
    pub fn validate(&self) -> AppResult<()> {
        if self.pricing.daily_cap <= Decimal::ZERO {
            return Err(AppError::Configuration(format!(
                "pricing.daily_cap must be positive, got {}",
                self.pricing.daily_cap
            )));
        }
        Ok(())
    }
}
