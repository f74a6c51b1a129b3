//! # Validation Module
//!
//! Range checks shared by every value object in the crate.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: zeikomi-input                                                 │
//! │  ├── Order code syntax                                                  │
//! │  └── Enumerations (product, service, delivery codes)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: zeikomi-core constructors                                     │
//! │  └── THIS MODULE: price range and order size                            │
//! │                                                                         │
//! │  Nothing downstream re-validates: a constructed value is valid.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use zeikomi_core::validation::{validate_order_size, validate_price};
//!
//! assert!(validate_price("price", 500).is_ok());
//! assert!(validate_order_size(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_ORDER_ITEMS, MAX_PRICE, MIN_ORDER_ITEMS, MIN_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a yen price.
///
/// ## Rules
/// - Must be between MIN_PRICE (0) and MAX_PRICE (99999), both inclusive
/// - Zero is allowed (free items)
///
/// `field` names the role of the price in the error message
/// ("price", "oral product price", ...).
///
/// ## Example
/// ```rust
/// use zeikomi_core::validation::validate_price;
///
/// assert!(validate_price("price", 0).is_ok());
/// assert!(validate_price("price", 99999).is_ok());
/// assert!(validate_price("price", -1).is_err());
/// assert!(validate_price("price", 100000).is_err());
/// ```
pub fn validate_price(field: &'static str, value: i64) -> ValidationResult<i64> {
    if !(MIN_PRICE..=MAX_PRICE).contains(&value) {
        return Err(ValidationError::PriceOutOfRange {
            field,
            value,
            min: MIN_PRICE,
            max: MAX_PRICE,
        });
    }

    Ok(value)
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of products in an order.
///
/// ## Rules
/// - At least MIN_ORDER_ITEMS (1)
/// - At most MAX_ORDER_ITEMS (10000)
pub fn validate_order_size(len: usize) -> ValidationResult<()> {
    if !(MIN_ORDER_ITEMS..=MAX_ORDER_ITEMS).contains(&len) {
        return Err(ValidationError::ListSizeOutOfRange {
            len,
            min: MIN_ORDER_ITEMS,
            max: MAX_ORDER_ITEMS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
