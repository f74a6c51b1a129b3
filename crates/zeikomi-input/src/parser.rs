//! # Parser
//!
//! Each item code is consumed field by field, left to right:
//!
//! ```text
//! "BnEKM1200"
//!  ├─ product      "Bn"  → Newspaper, non-oral   rest "EKM1200"
//!  ├─ service      "E"   → EatIn                 rest "KM1200"
//!  ├─ method       "K"   → Catering              rest "M1200"
//!  ├─ destination  "M"   → Apartment             rest "1200"
//!  └─ price        "1200"
//! ```

use tracing::debug;
use zeikomi_core::{DeliveryDestination, OrderInput};

use crate::codes::{
    match_char, match_product, DELIVERY_METHOD_CODES, DESTINATION_CODES, SERVICE_CODES,
};
use crate::error::{ParseError, ParseResult};
use crate::ITEM_SEPARATOR;

/// Parses a whole basket, one `OrderInput` per `:`-separated item.
///
/// ## Errors
/// `EmptyInput` for an empty string, otherwise the first item error.
pub fn parse_basket(input: &str) -> ParseResult<Vec<OrderInput>> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let items = input
        .split(ITEM_SEPARATOR)
        .map(parse_item)
        .collect::<ParseResult<Vec<_>>>()?;

    debug!(items = items.len(), "Basket parsed");
    Ok(items)
}

/// Parses a single item code such as `BTDD500`.
pub fn parse_item(item: &str) -> ParseResult<OrderInput> {
    let product = match_product(item).ok_or_else(|| ParseError::UnknownProductCode {
        item: item.to_string(),
    })?;
    let rest = &item[product.code.len()..];

    let service =
        match_char(&SERVICE_CODES, rest).ok_or_else(|| ParseError::UnknownServiceCode {
            item: item.to_string(),
        })?;
    let rest = &rest[1..];

    let delivery_method = match_char(&DELIVERY_METHOD_CODES, rest).ok_or_else(|| {
        ParseError::UnknownDeliveryMethodCode {
            item: item.to_string(),
        }
    })?;
    let rest = &rest[1..];

    let (delivery_destination, rest) = match match_char(&DESTINATION_CODES, rest) {
        Some(destination) => (destination, &rest[1..]),
        None => (DeliveryDestination::NoPlace, rest),
    };

    // Whatever is left must at least look like a number, otherwise the
    // destination code was the problem
    if !rest.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
        return Err(ParseError::UnknownDestinationCode {
            item: item.to_string(),
        });
    }

    let price = rest.parse::<i64>().map_err(|_| ParseError::InvalidPrice {
        item: item.to_string(),
    })?;

    Ok(OrderInput {
        category: product.category,
        is_oral: product.is_oral,
        service,
        delivery_method,
        delivery_destination,
        price,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
