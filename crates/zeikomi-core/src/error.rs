//! # Error Types
//!
//! Domain-specific error types for zeikomi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  zeikomi-core errors (this file)                                        │
//! │  ├── CoreError        - Anything that aborts a basket                   │
//! │  └── ValidationError  - A value object refused its input                │
//! │                                                                         │
//! │  zeikomi-input errors (separate crate)                                  │
//! │  └── ParseError       - Malformed order code string                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CLI output line                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, offending value)
//! 3. Errors are enum variants, never String
//! 4. Every error is raised by a constructor, never by a later stage

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors that abort the price calculation for a whole basket.
///
/// There is no partial-failure mode: one invalid item invalidates the basket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Value-object validation errors.
///
/// ## When These Occur
/// ```text
/// OrderInput { price: 100000 }
///      │
///      ▼
/// ProductPrice::new(100000) ← fails here, before any classification runs
///      │
///      ▼
/// PriceOutOfRange { field: "price", value: 100000, min: 0, max: 99999 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A price fell outside the accepted yen range.
    ///
    /// Raised by every priced value object: ordered product price, oral and
    /// non-oral bundle sides, single product price, taxable product price.
    #[error("{field} must be between {min} and {max} yen, got {value}")]
    PriceOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The ordered product list was empty or too long.
    #[error("order must contain between {min} and {max} products, got {len}")]
    ListSizeOutOfRange { len: usize, min: usize, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
