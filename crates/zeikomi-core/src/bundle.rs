//! # Bundle Classifier
//!
//! Finds integrated assets: an oral product immediately followed by a
//! non-oral product (e.g. a toy sold together with sweets), which are taxed
//! as one item. Everything else is passed on as a single product.
//!
//! ## Pairing
//! ```text
//! index:     0        1        2        3
//!          Book   Beverage   Book    Food
//!          (non)   (oral)   (non)   (oral)
//!
//! windows:  [0,1]  (non, oral)   no
//!           [1,2]  (oral, non)   YES → IntegratedAsset(1, 2)
//!           [2,3]  (non, oral)   no
//!
//! output:   IntegratedAsset(1, 2), Single(0), Single(3)
//! ```
//!
//! A product can only sit in one pair: pair (a, b) needs `b` non-oral, and
//! the next pair (b, c) would need `b` oral.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::order::{OrderedProduct, OrderedProductId, OrderedProductList};
use crate::types::{
    DeliveryDestination, DeliveryMethod, NonOralProductPrice, OralProductPrice, ProductCategory,
    ServiceType, SingleProductPrice,
};
use crate::validation::ValidationResult;

// =============================================================================
// Food and Beverage Predicate
// =============================================================================

/// Decides whether an ordered product is "food and beverage" for the
/// reduced tax rate.
///
/// ## Checks (first failing check wins)
/// 1. Must be an oral product
/// 2. Must not be alcohol, a quasi-drug, or medicine
/// 3. Must be take-out (eating in is standard-rated)
/// 4. Catering only qualifies when delivered to a nursing home
pub fn is_food_and_beverage(product: &OrderedProduct) -> bool {
    if !product.is_oral {
        return false;
    }

    if product.category.is_excluded_from_food_and_beverage() {
        return false;
    }

    if product.service != ServiceType::TakeOut {
        return false;
    }

    if product.delivery_method == DeliveryMethod::Catering
        && product.delivery_destination != DeliveryDestination::NursingHome
    {
        return false;
    }

    true
}

// =============================================================================
// Unclassified Products
// =============================================================================

/// Oral side of an integrated asset candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OralPart {
    pub price: OralProductPrice,
    pub is_food_and_beverage: bool,
}

/// Non-oral side of an integrated asset candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NonOralPart {
    pub price: NonOralProductPrice,
}

/// A product (or bundle) whose tax category has not been decided yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnclassifiedProduct {
    /// Two adjacent ordered products taxed as one.
    IntegratedAsset { oral: OralPart, non_oral: NonOralPart },
    /// An ordered product that was not bundled.
    Single {
        category: ProductCategory,
        price: SingleProductPrice,
        is_oral: bool,
        is_food_and_beverage: bool,
    },
}

impl UnclassifiedProduct {
    /// Builds an integrated asset candidate from an (oral, non-oral) pair.
    pub fn integrated_asset(
        oral: &OrderedProduct,
        non_oral: &OrderedProduct,
    ) -> ValidationResult<Self> {
        Ok(UnclassifiedProduct::IntegratedAsset {
            oral: OralPart {
                price: OralProductPrice::new(oral.price.value())?,
                is_food_and_beverage: is_food_and_beverage(oral),
            },
            non_oral: NonOralPart {
                price: NonOralProductPrice::new(non_oral.price.value())?,
            },
        })
    }

    /// Builds a single product candidate.
    pub fn single(product: &OrderedProduct) -> ValidationResult<Self> {
        Ok(UnclassifiedProduct::Single {
            category: product.category,
            price: SingleProductPrice::new(product.price.value())?,
            is_oral: product.is_oral,
            is_food_and_beverage: is_food_and_beverage(product),
        })
    }
}

// =============================================================================
// Classifier
// =============================================================================

/// Returns every adjacent (oral, non-oral) pair, in list order.
pub fn find_bundle_pairs(products: &[OrderedProduct]) -> Vec<(&OrderedProduct, &OrderedProduct)> {
    products
        .windows(2)
        .filter(|pair| pair[0].is_oral && !pair[1].is_oral)
        .map(|pair| (&pair[0], &pair[1]))
        .collect()
}

/// Splits the order into integrated asset candidates and single products.
///
/// Bundles come first in encounter order, followed by the remaining
/// products in their original order.
pub fn classify_bundles(order: &OrderedProductList) -> ValidationResult<Vec<UnclassifiedProduct>> {
    let pairs = find_bundle_pairs(order.as_slice());

    let paired: HashSet<&OrderedProductId> = pairs
        .iter()
        .flat_map(|&(oral, non_oral)| [&oral.id, &non_oral.id])
        .collect();

    let mut unclassified = Vec::with_capacity(order.len() - pairs.len());
    for (oral, non_oral) in &pairs {
        unclassified.push(UnclassifiedProduct::integrated_asset(oral, non_oral)?);
    }
    for product in order.iter().filter(|p| !paired.contains(&p.id)) {
        unclassified.push(UnclassifiedProduct::single(product)?);
    }

    debug!(
        products = order.len(),
        bundles = pairs.len(),
        singles = unclassified.len() - pairs.len(),
        "Bundle classification complete"
    );

    Ok(unclassified)
}

// =============================================================================
// Unit Tests
// =============================================================================
