//! # zeikomi-core: Pure Pricing Logic for Zeikomi
//!
//! This crate turns a basket of ordered products into a single tax-inclusive
//! yen total under a two-rate consumption tax (8% reduced, 10% standard).
//! It contains no I/O: every function is deterministic.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Price Derivation Pipeline                        │
//! │                                                                         │
//! │  [OrderInput]                                                           │
//! │       │  order::OrderedProductList::from_inputs  (price, size checks)   │
//! │       ▼                                                                 │
//! │  OrderedProductList ─────────────────────────────────┐                  │
//! │       │  bundle::classify_bundles                    │                  │
//! │       ▼                                              │                  │
//! │  [UnclassifiedProduct]                               │                  │
//! │       │  classification::classify_all                │                  │
//! │       ▼                                              │                  │
//! │  [TaxableProductAndRate]                             │                  │
//! │       │  classification::total_with_tax              │                  │
//! │       ▼                                              ▼                  │
//! │  Yen (tax-inclusive) ──► discount::apply_discount_rule                  │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                              Yen (final)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Enumerations, tax rates, and role-specific price types
//! - [`money`] - `Yen` amounts with integer rounding rules
//! - [`order`] - Ordered products and the bounded order list
//! - [`bundle`] - Integrated asset (bundle) detection
//! - [`classification`] - Tax-rate classification and tax-inclusive totals
//! - [`discount`] - Basket-level discount rule
//! - [`workflow`] - The full pipeline
//! - [`error`] - Domain error types
//! - [`validation`] - Range checks shared by the value objects
//!
//! ## Example Usage
//!
//! ```rust
//! use zeikomi_core::order::OrderInput;
//! use zeikomi_core::types::{DeliveryDestination, DeliveryMethod, ProductCategory, ServiceType};
//! use zeikomi_core::workflow::derive_total_price;
//!
//! let basket = vec![OrderInput {
//!     category: ProductCategory::Book,
//!     is_oral: false,
//!     service: ServiceType::TakeOut,
//!     delivery_method: DeliveryMethod::Delivery,
//!     delivery_destination: DeliveryDestination::House,
//!     price: 500,
//! }];
//!
//! // Books are taxed at the standard 10% rate
//! let total = derive_total_price(&basket).unwrap();
//! assert_eq!(total.amount(), 550);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bundle;
pub mod classification;
pub mod discount;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;
pub mod workflow;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Yen;
pub use order::{OrderInput, OrderedProduct, OrderedProductId, OrderedProductList};
pub use types::*;
pub use workflow::{derive_breakdown, derive_total_price, PriceBreakdown};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest accepted price for any priced value object, in yen.
pub const MIN_PRICE: i64 = 0;

/// Highest accepted price for any priced value object, in yen.
pub const MAX_PRICE: i64 = 99_999;

/// Minimum number of products in one order.
pub const MIN_ORDER_ITEMS: usize = 1;

/// Maximum number of products in one order.
pub const MAX_ORDER_ITEMS: usize = 10_000;
