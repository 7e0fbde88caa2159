//! In-memory scooter inventory.

use rust_decimal::Decimal;

use super::error::InventoryError;
use super::scooter::Scooter;
use super::validation::{validate_price, validate_scooter_id};

/// Lookup of scooters by id.
///
/// Implementations must reject an empty id with `InventoryError::InvalidId`
/// and an unknown id with `InventoryError::ScooterNotFound`.
pub trait ScooterInventory {
    /// Returns the scooter with the given id.
    fn get_scooter(&self, id: &str) -> Result<&Scooter, InventoryError>;

    /// Returns the scooter with the given id for mutation.
    fn get_scooter_mut(&mut self, id: &str) -> Result<&mut Scooter, InventoryError>;
}

/// Inventory backed by a vector, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct ScooterService {
    scooters: Vec<Scooter>,
}

impl ScooterService {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new available scooter.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidId` if `id` is empty,
    /// `InventoryError::InvalidPrice` if the price is not positive, and
    /// `InventoryError::DuplicateScooter` if the id is already registered.
    pub fn add_scooter(
        &mut self,
        id: &str,
        price_per_minute: Decimal,
    ) -> Result<(), InventoryError> {
        validate_scooter_id(id)?;
        validate_price(price_per_minute)?;

        if self.scooters.iter().any(|s| s.id() == id) {
            return Err(InventoryError::DuplicateScooter(id.to_string()));
        }

        self.scooters.push(Scooter::new(id, price_per_minute));
        tracing::debug!(scooter_id = id, %price_per_minute, "scooter registered");
        Ok(())
    }

    /// Removes a scooter from the inventory.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidId` if `id` is empty,
    /// `InventoryError::ScooterNotFound` if it is not registered, and
    /// `InventoryError::ScooterInUse` if it is currently rented.
    pub fn remove_scooter(&mut self, id: &str) -> Result<Scooter, InventoryError> {
        validate_scooter_id(id)?;

        let index = self
            .scooters
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| InventoryError::ScooterNotFound(id.to_string()))?;

        if self.scooters[index].is_rented() {
            return Err(InventoryError::ScooterInUse(id.to_string()));
        }

        tracing::debug!(scooter_id = id, "scooter removed");
        Ok(self.scooters.remove(index))
    }

    /// All registered scooters.
    #[must_use]
    pub fn scooters(&self) -> &[Scooter] {
        &self.scooters
    }

    /// Number of registered scooters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scooters.len()
    }

    /// Returns true if no scooter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scooters.is_empty()
    }
}

impl ScooterInventory for ScooterService {
    fn get_scooter(&self, id: &str) -> Result<&Scooter, InventoryError> {
        validate_scooter_id(id)?;
        self.scooters
            .iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| InventoryError::ScooterNotFound(id.to_string()))
    }

    fn get_scooter_mut(&mut self, id: &str) -> Result<&mut Scooter, InventoryError> {
        validate_scooter_id(id)?;
        self.scooters
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| InventoryError::ScooterNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn inventory() -> ScooterService {
        let mut service = ScooterService::new();
        service.add_scooter("1", dec!(0.2)).unwrap();
        service.add_scooter("2", dec!(0.5)).unwrap();
        service
    }

    #[test]
    fn test_add_scooter() {
        let service = inventory();

        assert_eq!(service.len(), 2);
        let scooter = service.get_scooter("2").unwrap();
        assert_eq!(scooter.id(), "2");
        assert_eq!(scooter.price_per_minute(), dec!(0.5));
        assert!(!scooter.is_rented());
    }

    #[test]
    fn test_add_duplicate_scooter() {
        let mut service = inventory();

        let err = service.add_scooter("1", dec!(1)).unwrap_err();

        assert_eq!(err, InventoryError::DuplicateScooter("1".to_string()));
        assert_eq!(service.len(), 2);
    }

    #[test]
    fn test_add_scooter_invalid_input() {
        let mut service = ScooterService::new();

        assert_eq!(
            service.add_scooter("", dec!(1)),
            Err(InventoryError::InvalidId)
        );
        assert_eq!(
            service.add_scooter("1", dec!(0)),
            Err(InventoryError::InvalidPrice(dec!(0)))
        );
        assert!(service.is_empty());
    }

    #[test]
    fn test_remove_scooter() {
        let mut service = inventory();

        let removed = service.remove_scooter("1").unwrap();

        assert_eq!(removed.id(), "1");
        assert_eq!(service.scooters().len(), 1);
        assert_eq!(
            service.get_scooter("1").unwrap_err(),
            InventoryError::ScooterNotFound("1".to_string())
        );
    }

    #[test]
    fn test_remove_missing_scooter() {
        let mut service = inventory();

        assert_eq!(
            service.remove_scooter("9").unwrap_err().to_string(),
            "Scooter with id 9 doesn't exist"
        );
    }

    #[test]
    fn test_remove_rented_scooter_is_rejected() {
        let mut service = inventory();
        service.get_scooter_mut("1").unwrap().set_rented(true);

        let err = service.remove_scooter("1").unwrap_err();

        assert_eq!(err, InventoryError::ScooterInUse("1".to_string()));
        assert_eq!(service.len(), 2);
    }

    #[test]
    fn test_get_scooter_empty_id() {
        let service = inventory();

        assert_eq!(service.get_scooter("").unwrap_err(), InventoryError::InvalidId);
    }

    #[test]
    fn test_scooters_keep_registration_order() {
        let service = inventory();

        let ids: Vec<&str> = service.scooters().iter().map(Scooter::id).collect();

        assert_eq!(ids, vec!["1", "2"]);
    }
}
