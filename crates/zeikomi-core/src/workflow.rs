//! # Price Derivation Workflow
//!
//! Runs the whole pipeline for one basket. Stages run strictly in order and
//! nothing feeds back:
//!
//! ```text
//! inputs ─► order ─► bundles ─► taxable lines ─► tax-inclusive ─► discounted
//!             └───────────────── discount rule reads the order ──────┘
//! ```

use serde::Serialize;
use tracing::{debug, instrument};

use crate::bundle::{classify_bundles, UnclassifiedProduct};
use crate::classification::{classify_all, total_with_tax, TaxableProductAndRate};
use crate::discount::{apply_discount_rule, DiscountGroups};
use crate::error::CoreResult;
use crate::money::Yen;
use crate::order::{OrderInput, OrderedProductList};

/// Every intermediate result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub unclassified: Vec<UnclassifiedProduct>,
    pub lines: Vec<TaxableProductAndRate>,
    pub total_with_tax: Yen,
    pub discount_groups: DiscountGroups,
    pub discount_applied: bool,
    pub total: Yen,
}

/// Computes the final price of a basket.
///
/// ## Errors
/// - `PriceOutOfRange` for any price outside 0..=99999, including a bundle
///   whose combined price is too large
/// - `ListSizeOutOfRange` for an empty basket or one over 10000 products
pub fn derive_total_price(inputs: &[OrderInput]) -> CoreResult<Yen> {
    derive_breakdown(inputs).map(|breakdown| breakdown.total)
}

/// Computes the final price of a basket and keeps every stage's output.
#[instrument(level = "debug", skip(inputs), fields(products = inputs.len()))]
pub fn derive_breakdown(inputs: &[OrderInput]) -> CoreResult<PriceBreakdown> {
    let order = OrderedProductList::from_inputs(inputs)?;
    let unclassified = classify_bundles(&order)?;
    let lines = classify_all(&unclassified)?;
    let with_tax = total_with_tax(&lines);

    let outcome = apply_discount_rule(&order, with_tax);

    debug!(
        total_with_tax = %with_tax,
        discount_applied = outcome.applied,
        total = %outcome.total,
        "Price derived"
    );

    Ok(PriceBreakdown {
        unclassified,
        lines,
        total_with_tax: with_tax,
        discount_groups: outcome.groups,
        discount_applied: outcome.applied,
        total: outcome.total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::TaxableCategory;
    use crate::error::{CoreError, ValidationError};
    use crate::types::{DeliveryDestination, DeliveryMethod, ProductCategory, ServiceType};

    fn input(category: ProductCategory, is_oral: bool, price: i64) -> OrderInput {
        OrderInput {
            category,
            is_oral,
            service: ServiceType::TakeOut,
            delivery_method: DeliveryMethod::Catering,
            delivery_destination: DeliveryDestination::House,
            price,
        }
    }

    #[test]
    fn test_catering_basket() {
        // Food catered to a house is standard-rated, so the bundle is too
        let basket = [
            input(ProductCategory::Food, true, 400),
            input(ProductCategory::Book, false, 500),
            input(ProductCategory::Medicine, true, 300),
        ];
        // bundle 900 × 1.1 = 990, medicine 300 × 1.1 = 330
        assert_eq!(derive_total_price(&basket).unwrap().amount(), 1320);
    }

    #[test]
    fn test_breakdown_exposes_stages() {
        let basket = [
            input(ProductCategory::Food, true, 400),
            input(ProductCategory::Book, false, 500),
            input(ProductCategory::Medicine, true, 300),
        ];
        let breakdown = derive_breakdown(&basket).unwrap();

        assert_eq!(breakdown.unclassified.len(), 2);
        assert_eq!(
            breakdown.lines[0].product.category,
            TaxableCategory::StandardTaxRateIntegratedAsset
        );
        assert_eq!(breakdown.lines[1].product.category, TaxableCategory::Other);
        assert_eq!(breakdown.total_with_tax.amount(), 1320);
        assert!(!breakdown.discount_applied);
        assert_eq!(breakdown.total, breakdown.total_with_tax);
    }

    #[test]
    fn test_breakdown_carries_discount_outcome() {
        // Newspaper 200 against book 300 is exactly 2:3
        let basket = [
            input(ProductCategory::Newspaper, false, 200),
            input(ProductCategory::Book, false, 300),
        ];
        let breakdown = derive_breakdown(&basket).unwrap();

        assert_eq!(breakdown.discount_groups.reduced_total.amount(), 200);
        assert_eq!(breakdown.discount_groups.other_total.amount(), 300);
        assert!(breakdown.discount_applied);
        // 216 + 330 = 546, then 90% floored
        assert_eq!(breakdown.total_with_tax.amount(), 546);
        assert_eq!(breakdown.total.amount(), 491);
    }

    #[test]
    fn test_errors_surface_from_any_stage() {
        assert!(matches!(
            derive_total_price(&[]),
            Err(CoreError::Validation(ValidationError::ListSizeOutOfRange { .. }))
        ));
        assert!(matches!(
            derive_total_price(&[input(ProductCategory::Book, false, 100000)]),
            Err(CoreError::Validation(ValidationError::PriceOutOfRange { .. }))
        ));

        let oversized_bundle = [
            input(ProductCategory::Food, true, 60000),
            input(ProductCategory::Book, false, 60000),
        ];
        assert!(matches!(
            derive_total_price(&oversized_bundle),
            Err(CoreError::Validation(ValidationError::PriceOutOfRange {
                field: "taxable product price",
                ..
            }))
        ));
    }

    #[test]
    fn test_is_idempotent() {
        let basket = [
            input(ProductCategory::Beverage, true, 200),
            input(ProductCategory::Book, false, 300),
        ];
        let first = derive_total_price(&basket).unwrap();
        let second = derive_total_price(&basket).unwrap();
        assert_eq!(first, second);
    }
}
