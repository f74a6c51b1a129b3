//! # zeikomi-input: Order Code Parser
//!
//! Parses the compact order code format into `OrderInput` records.
//!
//! ## Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  basket   = item (":" item)*                                            │
//! │  item     = product service method [destination] price                  │
//! │                                                                         │
//! │  "DTDD400:BTDD199"                                                      │
//! │    D  T  D  D  400          B  T  D  D  199                             │
//! │    │  │  │  │   └ price     │  │  │  │   └ price                        │
//! │    │  │  │  └ House         │  │  │  └ House                            │
//! │    │  │  └ Delivery         │  │  └ Delivery                            │
//! │    │  └ TakeOut             │  └ TakeOut                                │
//! │    └ Beverage (oral)        └ Book (non-oral)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! See [`codes`] for the full code tables.
//!
//! ## Example
//! ```rust
//! use zeikomi_input::parse_basket;
//! use zeikomi_core::ProductCategory;
//!
//! let basket = parse_basket("DTDD400:BTDD199").unwrap();
//! assert_eq!(basket.len(), 2);
//! assert_eq!(basket[0].category, ProductCategory::Beverage);
//! assert!(basket[0].is_oral);
//! assert_eq!(basket[1].price, 199);
//! ```

pub mod codes;
pub mod error;
pub mod parser;

pub use error::{ParseError, ParseResult};
pub use parser::{parse_basket, parse_item};

/// Separator between item codes in a basket.
pub const ITEM_SEPARATOR: char = ':';
