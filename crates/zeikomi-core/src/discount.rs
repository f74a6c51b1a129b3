//! # Discount Rule
//!
//! A basket gets 10% off its tax-inclusive total when the pre-tax prices of
//! its "other" items are exactly 1.5 times those of its food, beverage and
//! newspaper items.
//!
//! ## Eligibility
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Ordered products (raw, before bundling)                                │
//! │       │                                                                 │
//! │       ├── food and beverage OR newspaper ──► group A  (Σ price)         │
//! │       └── everything else                ──► group B  (Σ price)         │
//! │                                                                         │
//! │  eligible ⇔ A × 1.5 == B   (checked exactly as A × 3 == B × 2)          │
//! │                                                                         │
//! │  A = 200, B = 300 → eligible      A = 200, B = 301 → not eligible       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rule reads the ordered products, not the taxable products, so bundling
//! does not change the outcome.

use serde::Serialize;
use tracing::debug;

use crate::bundle::is_food_and_beverage;
use crate::money::Yen;
use crate::order::{OrderedProduct, OrderedProductList};
use crate::types::ProductCategory;

/// Share of the total kept when the discount applies.
pub const DISCOUNTED_PERCENT: u32 = 90;

// reduced × 1.5 == other, kept in integers as reduced × 3 == other × 2
const REDUCED_GROUP_FACTOR: i64 = 3;
const OTHER_GROUP_FACTOR: i64 = 2;

/// Pre-tax price sums of the two discount groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountGroups {
    /// Food and beverage or newspaper.
    pub reduced_total: Yen,
    /// Everything else.
    pub other_total: Yen,
}

impl DiscountGroups {
    /// Sums the raw prices of the ordered products into the two groups.
    pub fn from_order(order: &OrderedProductList) -> Self {
        order.iter().fold(DiscountGroups::default(), |mut groups, product| {
            if counts_towards_reduced_group(product) {
                groups.reduced_total += product.price.yen();
            } else {
                groups.other_total += product.price.yen();
            }
            groups
        })
    }

    /// True when `reduced_total × 1.5 == other_total` exactly.
    pub fn is_eligible(&self) -> bool {
        self.reduced_total.amount() * REDUCED_GROUP_FACTOR
            == self.other_total.amount() * OTHER_GROUP_FACTOR
    }
}

fn counts_towards_reduced_group(product: &OrderedProduct) -> bool {
    is_food_and_beverage(product) || product.category == ProductCategory::Newspaper
}

/// Applies the discount to a tax-inclusive total, rounding down.
pub fn discount(total_with_tax: Yen, eligible: bool) -> Yen {
    if eligible {
        total_with_tax.apply_percentage(DISCOUNTED_PERCENT)
    } else {
        total_with_tax
    }
}

/// What the discount rule decided for one basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountOutcome {
    pub groups: DiscountGroups,
    pub applied: bool,
    /// Final total, discounted when `applied`.
    pub total: Yen,
}

/// Checks eligibility against `order` and discounts `total_with_tax` if it
/// qualifies.
pub fn apply_discount_rule(order: &OrderedProductList, total_with_tax: Yen) -> DiscountOutcome {
    let groups = DiscountGroups::from_order(order);
    let applied = groups.is_eligible();
    debug!(
        reduced_total = groups.reduced_total.amount(),
        other_total = groups.other_total.amount(),
        eligible = applied,
        "Discount eligibility checked"
    );

    DiscountOutcome {
        groups,
        applied,
        total: discount(total_with_tax, applied),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
