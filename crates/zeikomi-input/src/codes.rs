//! # Code Tables
//!
//! | Field           | Code | Meaning                      |
//! |-----------------|------|------------------------------|
//! | product         | `B`  | Book (non-oral)              |
//! |                 | `D`  | Beverage (oral)              |
//! |                 | `Da` | Alcohol (oral)               |
//! |                 | `de` | QuasiDrug (oral)             |
//! |                 | `Bn` | Newspaper (non-oral)         |
//! |                 | `d`  | Medicine (oral)              |
//! |                 | `O`  | Other (non-oral)             |
//! |                 | `P`  | Food (oral)                  |
//! | service         | `T`  | TakeOut                      |
//! |                 | `E`  | EatIn                        |
//! | delivery method | `K`  | Catering                     |
//! |                 | `D`  | Delivery                     |
//! |                 | `N`  | InternetDelivery             |
//! | destination     | `D`  | House                        |
//! |                 | `N`  | NursingHome                  |
//! |                 | `M`  | Apartment                    |
//! |                 | none | NoPlace                      |
//!
//! Product codes overlap (`B` / `Bn`, `D` / `Da`, `d` / `de`), so the table
//! is ordered longest code first and matched in that order.

use zeikomi_core::{DeliveryDestination, DeliveryMethod, ProductCategory, ServiceType};

/// A product code and what it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCode {
    pub code: &'static str,
    pub category: ProductCategory,
    /// Whether the product is ingested. Fixed by the product code.
    pub is_oral: bool,
}

/// Product codes, longest first.
pub const PRODUCT_CODES: [ProductCode; 8] = [
    ProductCode { code: "Da", category: ProductCategory::Alcohol, is_oral: true },
    ProductCode { code: "de", category: ProductCategory::QuasiDrug, is_oral: true },
    ProductCode { code: "Bn", category: ProductCategory::Newspaper, is_oral: false },
    ProductCode { code: "B", category: ProductCategory::Book, is_oral: false },
    ProductCode { code: "D", category: ProductCategory::Beverage, is_oral: true },
    ProductCode { code: "d", category: ProductCategory::Medicine, is_oral: true },
    ProductCode { code: "O", category: ProductCategory::Other, is_oral: false },
    ProductCode { code: "P", category: ProductCategory::Food, is_oral: true },
];

pub const SERVICE_CODES: [(char, ServiceType); 2] =
    [('T', ServiceType::TakeOut), ('E', ServiceType::EatIn)];

pub const DELIVERY_METHOD_CODES: [(char, DeliveryMethod); 3] = [
    ('K', DeliveryMethod::Catering),
    ('D', DeliveryMethod::Delivery),
    ('N', DeliveryMethod::InternetDelivery),
];

/// Destination codes. An absent code means `NoPlace`.
pub const DESTINATION_CODES: [(char, DeliveryDestination); 3] = [
    ('D', DeliveryDestination::House),
    ('N', DeliveryDestination::NursingHome),
    ('M', DeliveryDestination::Apartment),
];

/// Finds the product code `input` starts with, longest code first.
pub fn match_product(input: &str) -> Option<ProductCode> {
    PRODUCT_CODES
        .iter()
        .find(|product| input.starts_with(product.code))
        .copied()
}

/// Looks up a single-character code.
pub fn match_char<T: Copy>(table: &[(char, T)], input: &str) -> Option<T> {
    let first = input.chars().next()?;
    table
        .iter()
        .find(|(code, _)| *code == first)
        .map(|(_, value)| *value)
}
