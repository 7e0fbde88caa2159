//! Input guards for inventory operations.

use rust_decimal::Decimal;

use super::error::InventoryError;

/// Rejects empty scooter ids.
///
/// # Errors
///
/// Returns `InventoryError::InvalidId` if `id` is empty.
pub fn validate_scooter_id(id: &str) -> Result<(), InventoryError> {
    if id.is_empty() {
        return Err(InventoryError::InvalidId);
    }
    Ok(())
}

/// Rejects non-positive prices per minute.
///
/// # Errors
///
/// Returns `InventoryError::InvalidPrice` if `price_per_minute <= 0`.
pub fn validate_price(price_per_minute: Decimal) -> Result<(), InventoryError> {
    if price_per_minute <= Decimal::ZERO {
        return Err(InventoryError::InvalidPrice(price_per_minute));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_id_is_invalid() {
        assert_eq!(validate_scooter_id(""), Err(InventoryError::InvalidId));
        assert_eq!(
            InventoryError::InvalidId.to_string(),
            "Id cannot be null or empty"
        );
    }

    #[test]
    fn test_non_empty_id_is_valid() {
        assert!(validate_scooter_id("1").is_ok());
    }

    #[test]
    fn test_price_must_be_positive() {
        assert!(validate_price(dec!(0.01)).is_ok());
        assert_eq!(
            validate_price(dec!(0)),
            Err(InventoryError::InvalidPrice(dec!(0)))
        );
        assert_eq!(
            validate_price(dec!(-1)),
            Err(InventoryError::InvalidPrice(dec!(-1)))
        );
    }
}
