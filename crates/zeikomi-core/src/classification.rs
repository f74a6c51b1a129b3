//! # Tax-Rate Classification
//!
//! Decides the tax category of every unclassified product and computes the
//! tax-inclusive total.
//!
//! ## Precedence (first match wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UnclassifiedProduct                                                    │
//! │       │                                                                 │
//! │       ├── IntegratedAsset                                               │
//! │       │     ├── (oral + non-oral) × 1.1 < ¥10,000                       │
//! │       │     │   AND oral × 2 > non-oral                                 │
//! │       │     │   AND oral side is food and beverage                      │
//! │       │     │        └──► ReducedTaxRateIntegratedAsset   8%            │
//! │       │     └── otherwise ──► StandardTaxRateIntegratedAsset  10%       │
//! │       │                                                                 │
//! │       └── Single                                                        │
//! │             ├── category Newspaper ──► Newspaper          8%            │
//! │             ├── food and beverage  ──► FoodAndBeverage    8%            │
//! │             └── otherwise          ──► Other              10%           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A bundle never falls through to the single-product rules, and a single
//! product never becomes a bundle category.

use serde::Serialize;
use tracing::debug;

use crate::bundle::{NonOralPart, OralPart, UnclassifiedProduct};
use crate::money::Yen;
use crate::types::{ProductCategory, TaxRate, TaxableProductPrice};
use crate::validation::ValidationResult;

/// Tax-inclusive bundle price must stay strictly below this to be reduced-rated.
pub const REDUCED_RATE_BUNDLE_CEILING: i64 = 10_000;

/// Tax rate used when testing a bundle against the ceiling.
const BUNDLE_CEILING_RATE: TaxRate = TaxRate::Standard;

// =============================================================================
// Taxable Products
// =============================================================================

/// Tax category of a classified product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxableCategory {
    FoodAndBeverage,
    Newspaper,
    ReducedTaxRateIntegratedAsset,
    StandardTaxRateIntegratedAsset,
    Other,
}

impl TaxableCategory {
    /// The tax rate for this category.
    ///
    /// Exhaustive over the enum: adding a category without a rate does not
    /// compile.
    pub const fn tax_rate(&self) -> TaxRate {
        match self {
            TaxableCategory::FoodAndBeverage => TaxRate::Reduced,
            TaxableCategory::Newspaper => TaxRate::Reduced,
            TaxableCategory::ReducedTaxRateIntegratedAsset => TaxRate::Reduced,
            TaxableCategory::StandardTaxRateIntegratedAsset => TaxRate::Standard,
            TaxableCategory::Other => TaxRate::Standard,
        }
    }
}

/// A product (or bundle) with its tax category decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxableProduct {
    pub category: TaxableCategory,
    pub price: TaxableProductPrice,
}

impl TaxableProduct {
    pub fn new(category: TaxableCategory, price: TaxableProductPrice) -> Self {
        TaxableProduct { category, price }
    }

    /// Pairs the product with the rate its category carries.
    pub fn with_tax_rate(self) -> TaxableProductAndRate {
        TaxableProductAndRate {
            rate: self.category.tax_rate(),
            product: self,
        }
    }
}

/// The unit the tax total is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxableProductAndRate {
    pub product: TaxableProduct,
    pub rate: TaxRate,
}

impl TaxableProductAndRate {
    /// Tax-inclusive price of this line, rounded half up.
    pub fn total_with_tax(&self) -> Yen {
        self.product.price.yen().with_tax(self.rate)
    }
}

// =============================================================================
// Classifier
// =============================================================================

/// Whether a bundle qualifies for the reduced rate.
///
/// All three must hold:
/// - tax-inclusive combined price (at 10%) is below ¥10,000
/// - the oral side is more than a third of the combined price
/// - the oral side is food and beverage
fn is_reduced_rate_bundle(oral: &OralPart, non_oral: &NonOralPart) -> bool {
    // Compared in percent units so 9091 × 110% = 10000.1 is not rounded under
    let combined = oral.price.value() + non_oral.price.value();
    let under_ceiling =
        combined * i64::from(BUNDLE_CEILING_RATE.percent()) < REDUCED_RATE_BUNDLE_CEILING * 100;
    let predominantly_oral = oral.price.value() * 2 > non_oral.price.value();

    under_ceiling && predominantly_oral && oral.is_food_and_beverage
}

/// Classifies one product.
///
/// ## Errors
/// `PriceOutOfRange` when a bundle's combined price exceeds 99999.
pub fn classify(product: &UnclassifiedProduct) -> ValidationResult<TaxableProduct> {
    let classified = match product {
        UnclassifiedProduct::IntegratedAsset { oral, non_oral } => {
            let price = TaxableProductPrice::new(oral.price.value() + non_oral.price.value())?;
            if is_reduced_rate_bundle(oral, non_oral) {
                TaxableProduct::new(TaxableCategory::ReducedTaxRateIntegratedAsset, price)
            } else {
                TaxableProduct::new(TaxableCategory::StandardTaxRateIntegratedAsset, price)
            }
        }
        UnclassifiedProduct::Single {
            category,
            price,
            is_food_and_beverage,
            ..
        } => {
            let price = TaxableProductPrice::new(price.value())?;
            if *category == ProductCategory::Newspaper {
                TaxableProduct::new(TaxableCategory::Newspaper, price)
            } else if *is_food_and_beverage {
                TaxableProduct::new(TaxableCategory::FoodAndBeverage, price)
            } else {
                TaxableProduct::new(TaxableCategory::Other, price)
            }
        }
    };

    Ok(classified)
}

/// Classifies every product and attaches its tax rate, preserving order.
pub fn classify_all(products: &[UnclassifiedProduct]) -> ValidationResult<Vec<TaxableProductAndRate>> {
    products
        .iter()
        .map(|product| classify(product).map(TaxableProduct::with_tax_rate))
        .collect()
}

/// Sums the tax-inclusive price of every line, each rounded on its own.
pub fn total_with_tax(lines: &[TaxableProductAndRate]) -> Yen {
    let total: Yen = lines.iter().map(TaxableProductAndRate::total_with_tax).sum();
    debug!(lines = lines.len(), total = total.amount(), "Tax-inclusive total computed");
    total
}

// =============================================================================
// Unit Tests
// =============================================================================
