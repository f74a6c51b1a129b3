//! # Order Construction
//!
//! Builds the validated, bounded list of ordered products that every later
//! stage consumes.
//!
//! ## Flow
//! ```text
//! [OrderInput] ──► OrderedProduct::from_input (price check, fresh id)
//!                          │
//!                          ▼
//!              OrderedProductList::new (1..=10000 products)
//! ```
//!
//! The first invalid record aborts the whole basket.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreResult;
use crate::types::{DeliveryDestination, DeliveryMethod, ProductCategory, ProductPrice, ServiceType};
use crate::validation::{validate_order_size, ValidationResult};

// =============================================================================
// Order Input
// =============================================================================

/// One raw order record, as supplied by a parser or a JSON payload.
///
/// Enumerations are already typed; only the price still needs checking.
/// The field aliases accept the record names used by older clients
/// (`productType`, `isOralProduct`, `serviceType`, `deliveryTo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    #[serde(alias = "productType")]
    pub category: ProductCategory,
    #[serde(alias = "isOralProduct")]
    pub is_oral: bool,
    #[serde(alias = "serviceType")]
    pub service: ServiceType,
    pub delivery_method: DeliveryMethod,
    #[serde(alias = "deliveryTo")]
    pub delivery_destination: DeliveryDestination,
    pub price: i64,
}

// =============================================================================
// Ordered Product
// =============================================================================

/// Identity of an ordered product within a basket.
///
/// Bundling excludes paired products by this id, so two products with
/// identical attributes are still told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedProductId(String);

impl OrderedProductId {
    /// Generates a fresh UUID v4 id.
    pub fn generate() -> Self {
        OrderedProductId(Uuid::new_v4().to_string())
    }

    /// Wraps an existing token.
    pub fn new(value: impl Into<String>) -> Self {
        OrderedProductId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderedProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line item as ordered. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedProduct {
    pub id: OrderedProductId,
    pub category: ProductCategory,
    pub is_oral: bool,
    pub service: ServiceType,
    pub delivery_method: DeliveryMethod,
    pub delivery_destination: DeliveryDestination,
    pub price: ProductPrice,
}

impl OrderedProduct {
    /// Builds an ordered product with an explicit id.
    pub fn new(
        id: OrderedProductId,
        category: ProductCategory,
        is_oral: bool,
        service: ServiceType,
        delivery_method: DeliveryMethod,
        delivery_destination: DeliveryDestination,
        price: ProductPrice,
    ) -> Self {
        OrderedProduct {
            id,
            category,
            is_oral,
            service,
            delivery_method,
            delivery_destination,
            price,
        }
    }

    /// Builds an ordered product from a raw record, assigning a fresh id.
    ///
    /// ## Errors
    /// `PriceOutOfRange` when the price is outside 0..=99999.
    pub fn from_input(input: &OrderInput) -> ValidationResult<Self> {
        let price = ProductPrice::new(input.price)?;
        Ok(OrderedProduct::new(
            OrderedProductId::generate(),
            input.category,
            input.is_oral,
            input.service,
            input.delivery_method,
            input.delivery_destination,
            price,
        ))
    }
}

// =============================================================================
// Ordered Product List
// =============================================================================

/// The basket: between 1 and 10000 ordered products, in order.
///
/// ## Invariants
/// - Length is within MIN_ORDER_ITEMS..=MAX_ORDER_ITEMS
/// - Order is meaningful: adjacency decides bundling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderedProductList(Vec<OrderedProduct>);

impl OrderedProductList {
    /// Wraps products after checking the list size.
    ///
    /// ## Errors
    /// `ListSizeOutOfRange` for an empty list or more than 10000 products.
    pub fn new(products: Vec<OrderedProduct>) -> ValidationResult<Self> {
        validate_order_size(products.len())?;
        Ok(OrderedProductList(products))
    }

    /// Builds every product from its record, then the list.
    pub fn from_inputs(inputs: &[OrderInput]) -> CoreResult<Self> {
        let products = inputs
            .iter()
            .map(OrderedProduct::from_input)
            .collect::<ValidationResult<Vec<_>>>()?;
        Ok(OrderedProductList::new(products)?)
    }

    pub fn as_slice(&self) -> &[OrderedProduct] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderedProduct> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a OrderedProductList {
    type Item = &'a OrderedProduct;
    type IntoIter = std::slice::Iter<'a, OrderedProduct>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn book(price: i64) -> OrderInput {
        OrderInput {
            category: ProductCategory::Book,
            is_oral: false,
            service: ServiceType::TakeOut,
            delivery_method: DeliveryMethod::Delivery,
            delivery_destination: DeliveryDestination::House,
            price,
        }
    }

    #[test]
    fn test_from_input_copies_attributes() {
        let product = OrderedProduct::from_input(&book(500)).unwrap();
        assert_eq!(product.category, ProductCategory::Book);
        assert!(!product.is_oral);
        assert_eq!(product.price.value(), 500);
        assert!(Uuid::parse_str(product.id.as_str()).is_ok());
    }

    #[test]
    fn test_from_input_rejects_price() {
        assert!(OrderedProduct::from_input(&book(-1)).is_err());
        assert!(OrderedProduct::from_input(&book(100000)).is_err());
        assert!(OrderedProduct::from_input(&book(0)).is_ok());
        assert!(OrderedProduct::from_input(&book(99999)).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = OrderedProduct::from_input(&book(100)).unwrap();
        let b = OrderedProduct::from_input(&book(100)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_list_size_bounds() {
        assert!(matches!(
            OrderedProductList::from_inputs(&[]),
            Err(CoreError::Validation(ValidationError::ListSizeOutOfRange { len: 0, .. }))
        ));

        assert_eq!(OrderedProductList::from_inputs(&[book(1)]).unwrap().len(), 1);

        let max = vec![book(1); 10000];
        assert_eq!(OrderedProductList::from_inputs(&max).unwrap().len(), 10000);

        let too_many = vec![book(1); 10001];
        assert!(matches!(
            OrderedProductList::from_inputs(&too_many),
            Err(CoreError::Validation(ValidationError::ListSizeOutOfRange { len: 10001, .. }))
        ));
    }

    #[test]
    fn test_one_bad_price_fails_the_basket() {
        let err = OrderedProductList::from_inputs(&[book(100), book(100000), book(200)])
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::PriceOutOfRange { value: 100000, .. })
        ));
    }

    #[test]
    fn test_input_accepts_legacy_field_names() {
        let json = r#"{
            "productType": "Beverage",
            "isOralProduct": true,
            "serviceType": "TakeOut",
            "deliveryMethod": "Delivery",
            "deliveryTo": "House",
            "price": 500
        }"#;
        let input: OrderInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.category, ProductCategory::Beverage);
        assert!(input.is_oral);
        assert_eq!(input.delivery_destination, DeliveryDestination::House);
    }
}
