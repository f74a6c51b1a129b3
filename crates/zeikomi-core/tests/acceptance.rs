//! End-to-end baskets through the public API.

use zeikomi_core::{
    derive_breakdown, derive_total_price, DeliveryDestination, DeliveryMethod, OrderInput,
    ProductCategory, ServiceType,
};

/// Take-out, delivered to a house.
fn delivered(category: ProductCategory, price: i64) -> OrderInput {
    let is_oral = matches!(
        category,
        ProductCategory::Beverage
            | ProductCategory::Alcohol
            | ProductCategory::QuasiDrug
            | ProductCategory::Medicine
            | ProductCategory::Food
    );
    OrderInput {
        category,
        is_oral,
        service: ServiceType::TakeOut,
        delivery_method: DeliveryMethod::Delivery,
        delivery_destination: DeliveryDestination::House,
        price,
    }
}

fn book(price: i64) -> OrderInput {
    delivered(ProductCategory::Book, price)
}

fn beverage(price: i64) -> OrderInput {
    delivered(ProductCategory::Beverage, price)
}

fn total(basket: &[OrderInput]) -> i64 {
    derive_total_price(basket).unwrap().amount()
}

#[test]
fn single_book_is_standard_rated() {
    assert_eq!(total(&[book(500)]), 550);
}

#[test]
fn single_beverage_is_reduced_rated() {
    assert_eq!(total(&[beverage(500)]), 540);
}

#[test]
fn beverage_then_book_forms_reduced_bundle() {
    let breakdown = derive_breakdown(&[beverage(400), book(199)]).unwrap();
    assert_eq!(breakdown.lines.len(), 1);
    assert_eq!(breakdown.total_with_tax.amount(), 647);
    assert!(!breakdown.discount_applied);
    assert_eq!(breakdown.total.amount(), 647);
}

#[test]
fn leftover_book_is_taxed_separately() {
    assert_eq!(total(&[book(200), beverage(400), book(200)]), 868);
    assert_eq!(total(&[book(200), beverage(400), book(199)]), 867);
}

#[test]
fn two_to_three_basket_is_discounted() {
    // bundle 500 → 540, then 10% off
    assert_eq!(total(&[beverage(200), book(300)]), 486);
}

#[test]
fn bundle_not_predominantly_food_is_standard_rated() {
    // 2 × 2 = 4 is not above 5, so 7 × 1.1 = 7.7 → 8
    assert_eq!(total(&[beverage(2), book(5)]), 8);
}

#[test]
fn bundle_over_ceiling_is_standard_rated() {
    assert_eq!(total(&[beverage(10000), book(10000)]), 22000);
}

#[test]
fn rounding_is_per_line() {
    assert_eq!(total(&[beverage(3), beverage(3), beverage(3)]), 9);
}

#[test]
fn total_is_never_negative() {
    let baskets: Vec<Vec<OrderInput>> = vec![
        vec![book(0)],
        vec![beverage(0), book(0)],
        vec![beverage(99999)],
        vec![book(1); 10000],
    ];
    for basket in baskets {
        assert!(derive_total_price(&basket).unwrap().amount() >= 0);
    }
}

#[test]
fn boundary_prices_are_accepted() {
    assert_eq!(total(&[book(0)]), 0);
    assert_eq!(total(&[book(99999)]), 109999);
}

#[test]
fn out_of_range_inputs_fail_the_basket() {
    assert!(derive_total_price(&[book(-1)]).is_err());
    assert!(derive_total_price(&[book(100000)]).is_err());
    assert!(derive_total_price(&[]).is_err());
    assert!(derive_total_price(&vec![book(1); 10001]).is_err());
}

#[test]
fn breakdown_serializes_to_json() {
    let breakdown = derive_breakdown(&[beverage(400), book(199)]).unwrap();
    let json = serde_json::to_value(&breakdown).unwrap();
    assert_eq!(json["total"], 647);
    assert_eq!(json["lines"][0]["product"]["category"], "reduced_tax_rate_integrated_asset");
    assert_eq!(json["lines"][0]["rate"], "reduced");
    assert_eq!(json["unclassified"][0]["type"], "integrated_asset");
}
