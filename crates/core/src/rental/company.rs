//! Rental company: the rental lifecycle controller.

use chrono::Datelike;
use rust_decimal::Decimal;
use scootr_shared::AppConfig;
use tracing::{info, warn};

use super::clock::{Clock, SystemClock};
use super::error::RentalError;
use super::types::{ActiveRental, IncomePolicy};
use crate::accounting::AccountingService;
use crate::inventory::{Scooter, ScooterInventory};
use crate::ledger::{IncomeLedger, LedgerError};
use crate::pricing::PricingEngine;

/// Starts and ends rentals and reports the company's income.
///
/// Owns the set of active rentals and is the only component that changes a
/// scooter's rented flag. Every fallible step of a transition runs before
/// any state is changed, so a failed call leaves scooters, active rentals,
/// and the ledger untouched.
#[derive(Debug)]
pub struct RentalCompany<I, C = SystemClock> {
    name: String,
    inventory: I,
    accounting: AccountingService,
    active_rentals: Vec<ActiveRental>,
    clock: C,
    policy: IncomePolicy,
}

impl<I, C> RentalCompany<I, C>
where
    I: ScooterInventory,
    C: Clock,
{
    /// Creates a company with no active rentals.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::InvalidName` if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        inventory: I,
        accounting: AccountingService,
        clock: C,
    ) -> Result<Self, RentalError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RentalError::InvalidName);
        }

        Ok(Self {
            name,
            inventory,
            accounting,
            active_rentals: Vec::new(),
            clock,
            policy: IncomePolicy::default(),
        })
    }

    /// Creates a company with an empty ledger, priced and reported as configured.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::InvalidName` if `name` is empty, and
    /// `RentalError::Pricing` if the configured daily cap is not positive.
    pub fn from_config(
        name: impl Into<String>,
        inventory: I,
        clock: C,
        config: &AppConfig,
    ) -> Result<Self, RentalError> {
        let accounting = AccountingService::new(
            IncomeLedger::new(),
            PricingEngine::from_config(&config.pricing)?,
        );
        Ok(Self::new(name, inventory, accounting, clock)?
            .with_policy(IncomePolicy::from_config(&config.reporting)))
    }

    /// Replaces the income reporting policy.
    #[must_use]
    pub fn with_policy(mut self, policy: IncomePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Starts renting a scooter at the current time.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::Inventory` if the id is empty or unknown, and
    /// `RentalError::AlreadyRented` if the scooter is already rented.
    pub fn start_rent(&mut self, scooter_id: &str) -> Result<(), RentalError> {
        let now = self.clock.now();
        let scooter = self.inventory.get_scooter_mut(scooter_id)?;

        if scooter.is_rented() {
            warn!(scooter_id, "start rejected: scooter already rented");
            return Err(RentalError::AlreadyRented(scooter_id.to_string()));
        }

        scooter.set_rented(true);
        let price_per_minute = scooter.price_per_minute();
        self.active_rentals
            .push(ActiveRental::new(scooter_id, now, price_per_minute));

        info!(scooter_id, %price_per_minute, start_time = %now, "rental started");
        Ok(())
    }

    /// Ends the rental of a scooter at the current time.
    ///
    /// The rental is priced at the rate captured when it started, and the
    /// charge is recorded under the year the rental ended.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::Inventory` if the id is empty or unknown,
    /// `RentalError::NotRented` if the scooter has no rental in progress,
    /// and `RentalError::Pricing` if the clock is behind the rental start.
    pub fn end_rent(&mut self, scooter_id: &str) -> Result<Decimal, RentalError> {
        let now = self.clock.now();
        let scooter = self.inventory.get_scooter_mut(scooter_id)?;

        let index = self
            .active_rentals
            .iter()
            .position(|r| r.scooter_id == scooter_id && r.is_in_progress())
            .filter(|_| scooter.is_rented());
        let Some(index) = index else {
            warn!(scooter_id, "end rejected: scooter not rented");
            return Err(RentalError::NotRented(scooter_id.to_string()));
        };

        let rental = &self.active_rentals[index];
        let total_price = self
            .accounting
            .calculate_total_price(rental, rental.start_time, now)?;
        let completed = rental.clone().complete(now, total_price);
        self.accounting.record_completed(&completed)?;

        scooter.set_rented(false);
        self.active_rentals.remove(index);

        info!(
            scooter_id,
            %total_price,
            start_time = %completed.start_time,
            end_time = %completed.end_time,
            "rental ended"
        );
        Ok(total_price)
    }

    /// Income for `year`, or for all years if `None`.
    ///
    /// With `include_active`, rentals still in progress are priced as if
    /// they ended now and added to the all-years total. A specific year only
    /// includes them when the policy's `include_active_for_year` is set, and
    /// then only if the current year is the requested one.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::Ledger` with `LedgerError::UnknownYear` if the
    /// year has no recorded income (and no projected income applies), and
    /// `RentalError::Pricing` if an active rental cannot be priced.
    pub fn calculate_income(
        &self,
        year: Option<i32>,
        include_active: bool,
    ) -> Result<Decimal, RentalError> {
        match (year, include_active) {
            (None, true) => {
                let completed = self.accounting.get_report(None)?;
                let projected = self
                    .accounting
                    .projected_active_income(&self.active_rentals, self.clock.now())?;
                Ok(completed + projected)
            }
            (Some(year), true) if self.policy.include_active_for_year => {
                let now = self.clock.now();
                if now.year() != year {
                    return Ok(self.accounting.get_report(Some(year))?);
                }

                let projected = self
                    .accounting
                    .projected_active_income(&self.active_rentals, now)?;
                match self.accounting.get_report(Some(year)) {
                    Ok(completed) => Ok(completed + projected),
                    Err(LedgerError::UnknownYear(_)) => Ok(projected),
                    Err(err) => Err(err.into()),
                }
            }
            _ => Ok(self.accounting.get_report(year)?),
        }
    }

    /// Returns true if the scooter is currently rented.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::Inventory` if the id is empty or unknown.
    pub fn is_rented(&self, scooter_id: &str) -> Result<bool, RentalError> {
        Ok(self.inventory.get_scooter(scooter_id)?.is_rented())
    }

    /// Looks up a scooter.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::Inventory` if the id is empty or unknown.
    pub fn scooter(&self, scooter_id: &str) -> Result<&Scooter, RentalError> {
        Ok(self.inventory.get_scooter(scooter_id)?)
    }

    /// Company name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rentals currently in progress, in start order.
    #[must_use]
    pub fn active_rentals(&self) -> &[ActiveRental] {
        &self.active_rentals
    }

    /// The accounting service holding the income ledger.
    #[must_use]
    pub const fn accounting(&self) -> &AccountingService {
        &self.accounting
    }

    /// The scooter inventory.
    #[must_use]
    pub const fn inventory(&self) -> &I {
        &self.inventory
    }

    /// The scooter inventory, for registering and removing scooters.
    pub fn inventory_mut(&mut self) -> &mut I {
        &mut self.inventory
    }

    /// The income reporting policy.
    #[must_use]
    pub const fn policy(&self) -> IncomePolicy {
        self.policy
    }
}
