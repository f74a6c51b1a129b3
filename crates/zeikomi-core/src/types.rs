//! # Domain Types
//!
//! Core domain types used throughout Zeikomi.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌───────────────────────┐  │
//! │  │ ProductCategory  │  │   ServiceType    │  │   DeliveryMethod      │  │
//! │  │  Book  Beverage  │  │  TakeOut         │  │  Catering             │  │
//! │  │  Alcohol ...     │  │  EatIn           │  │  Delivery             │  │
//! │  │  (8 variants)    │  └──────────────────┘  │  InternetDelivery     │  │
//! │  └──────────────────┘                        └───────────────────────┘  │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────────────────────────────────┐ │
//! │  │     TaxRate      │  │  Role-specific prices (all 0..=99999)        │ │
//! │  │  Reduced  108%   │  │  ProductPrice  OralProductPrice              │ │
//! │  │  Standard 110%   │  │  NonOralProductPrice  SingleProductPrice     │ │
//! │  └──────────────────┘  │  TaxableProductPrice                         │ │
//! │                        └──────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why So Many Price Types?
//! A price read off an ordered product, the oral side of a bundle, and the
//! price a tax rate is applied to are different things. Giving each its own
//! type means a bundle's oral price cannot be passed where its non-oral
//! price is expected.

use serde::{Deserialize, Serialize};

use crate::money::Yen;
use crate::validation::{validate_price, ValidationResult};

// =============================================================================
// Product Attributes
// =============================================================================

/// What kind of product was ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Book,
    Beverage,
    Alcohol,
    QuasiDrug,
    Newspaper,
    Medicine,
    Other,
    Food,
}

impl ProductCategory {
    /// Categories that never count as food and beverage, even when ingested.
    pub const NEVER_FOOD_AND_BEVERAGE: [ProductCategory; 3] = [
        ProductCategory::Alcohol,
        ProductCategory::QuasiDrug,
        ProductCategory::Medicine,
    ];

    /// Returns true for alcohol, quasi-drugs and medicine.
    #[inline]
    pub fn is_excluded_from_food_and_beverage(&self) -> bool {
        Self::NEVER_FOOD_AND_BEVERAGE.contains(self)
    }
}

/// How the product is consumed at the point of sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    TakeOut,
    EatIn,
}

/// How the product reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMethod {
    Catering,
    Delivery,
    InternetDelivery,
}

/// Where the product is delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryDestination {
    House,
    NursingHome,
    Apartment,
    NoPlace,
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Consumption tax rate, expressed as the tax-inclusive multiplier.
///
/// ## Why an Enum?
/// Only two rates exist, and the rate is always derived from a taxable
/// category. It is never read from input, so there is no invalid rate to
/// represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRate {
    /// 8%: food and beverage, newspapers, qualifying bundles.
    Reduced,
    /// 10%: everything else.
    Standard,
}

impl TaxRate {
    /// Tax-inclusive multiplier in percent (108 or 110).
    #[inline]
    pub const fn percent(&self) -> u32 {
        match self {
            TaxRate::Reduced => 108,
            TaxRate::Standard => 110,
        }
    }
}

// =============================================================================
// Role-Specific Prices
// =============================================================================

macro_rules! bounded_price {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Validates the price against the accepted yen range.
            pub fn new(value: i64) -> ValidationResult<Self> {
                validate_price($field, value).map($name)
            }

            /// Returns the price in yen.
            #[inline]
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the price as a `Yen` amount.
            #[inline]
            pub const fn yen(&self) -> Yen {
                Yen::from_yen(self.0)
            }
        }
    };
}

bounded_price!(
    /// Price of an ordered product, as entered.
    ProductPrice,
    "price"
);

bounded_price!(
    /// Price of the oral side of an integrated asset candidate.
    OralProductPrice,
    "oral product price"
);

bounded_price!(
    /// Price of the non-oral side of an integrated asset candidate.
    NonOralProductPrice,
    "non-oral product price"
);

bounded_price!(
    /// Price of a product that was not bundled.
    SingleProductPrice,
    "single product price"
);

bounded_price!(
    /// Price a tax rate is applied to. For a bundle, the sum of both sides.
    TaxableProductPrice,
    "taxable product price"
);

// =============================================================================
// Unit Tests
// =============================================================================
