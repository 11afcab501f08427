//! # Validation Module
//!
//! Input validation rules for operator-entered product data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                          │
//! │                                                                 │
//! │  Layer 1: Console prompt (apps/cli)                             │
//! │  ├── Integer/decimal coercion, re-prompt on parse failure       │
//! │  └── THIS MODULE: field rules before the repository call        │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 2: Store (SQLite)                                        │
//! │  ├── NOT NULL constraints                                       │
//! │  ├── PRIMARY KEY uniqueness                                     │
//! │  └── CHECK (cantidad >= 0), CHECK (precio >= 0)                 │
//! │                                                                 │
//! │  The repository itself does NOT pre-check non-negativity; a     │
//! │  bad value that slips past layer 1 is rejected by the store     │
//! │  and surfaces as DbError::ConstraintViolation.                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_NAME_LEN;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use bodega_core::validation::validate_name;
///
/// assert!(validate_name("Queso Mozzarella 1kg").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be zero or greater (zero means out of stock, which is valid)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price value.
///
/// ## Rules
/// - Must be finite (NaN and infinities never reach the store)
/// - Must be zero or greater (zero is allowed: giveaway items)
///
/// ## Example
/// ```rust
/// use bodega_core::validation::validate_price;
///
/// assert!(validate_price(2.50).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-0.01).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Harina 1kg").is_ok());
        assert!(validate_name("  Orégano 50g  ").is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(200).is_ok());

        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(6.00).is_ok());

        assert!(validate_price(-0.30).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }
}
