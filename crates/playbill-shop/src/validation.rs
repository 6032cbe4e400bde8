//! # Validation Module
//!
//! Input checks run by [`crate::service::ShoppingService`] and the actor
//! constructors before anything is mutated.

use playbill_core::Money;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NICKNAME_LEN: usize = 50;
const MAX_PRODUCT_NAME_LEN: usize = 200;

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a buyer or seller nickname.
///
/// ```rust
/// use playbill_shop::validation::validate_nickname;
///
/// assert!(validate_nickname("seller123").is_ok());
/// assert!(validate_nickname("  ").is_err());
/// ```
pub fn validate_nickname(nickname: &str) -> ValidationResult<()> {
    validate_text("nickname", nickname, MAX_NICKNAME_LEN)
}

/// Validates a product name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_PRODUCT_NAME_LEN)
}

/// Validates a listing price. Free listings are rejected.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a listing or purchase quantity.
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates an opening balance. Zero is allowed.
pub fn validate_balance(balance: Money) -> ValidationResult<()> {
    if balance.is_negative() {
        return Err(ValidationError::MustBePositive {
            field: "balance".to_string(),
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
    fn test_validate_nickname() {
        assert!(validate_nickname("buyer123").is_ok());
        assert!(validate_nickname("").is_err());
        assert!(validate_nickname(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("노트북").is_ok());
        assert_eq!(
            validate_product_name(" ").unwrap_err(),
            ValidationError::Required {
                field: "name".to_string()
            }
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_validate_balance() {
        assert!(validate_balance(Money::zero()).is_ok());
        assert!(validate_balance(Money::from_cents(-1)).is_err());
    }
}
