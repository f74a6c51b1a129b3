//! # Money Module
//!
//! Provides the `Yen` type for handling monetary totals safely.
//!
//! ## Why Integer Yen?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │    so x.5 ties may land just above or below the midpoint                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Percent Rates                                    │
//! │    5 × 110 = 550 → (550 + 50) / 100 = 6                                 │
//! │    Every rounding step is exact and reproducible                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use zeikomi_core::money::Yen;
//! use zeikomi_core::types::TaxRate;
//!
//! let price = Yen::from_yen(599);
//! assert_eq!(price.with_tax(TaxRate::Reduced).amount(), 647); // 646.92 → 647
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::types::TaxRate;

// =============================================================================
// Yen Type
// =============================================================================

/// A yen amount. Yen has no minor unit, so this is a whole number.
///
/// ## Where Yen is Used
/// ```text
/// TaxableProduct.price ──► with_tax(rate) ──► line total ──┐
///                                                          ▼
///                                      Σ lines = tax-inclusive total
///                                                          │
///                                     apply_percentage(90) if discounted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Yen(i64);

impl Yen {
    /// Creates a Yen value.
    #[inline]
    pub const fn from_yen(amount: i64) -> Self {
        Yen(amount)
    }

    /// Returns the amount in yen.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero yen.
    #[inline]
    pub const fn zero() -> Self {
        Yen(0)
    }

    /// Returns the tax-inclusive amount, rounded half up to the yen.
    ///
    /// ## Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF UP (per line item)                                      │
    /// │                                                                     │
    /// │    500 × 108% = 540.00 → 540                                        │
    /// │    599 × 108% = 646.92 → 647                                        │
    /// │      5 × 110% =   5.50 →   6   (ties go up)                         │
    /// │      3 × 108% =   3.24 →   3                                        │
    /// │                                                                     │
    /// │  Applied to each line, never to the aggregate.                      │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// `(amount × percent + 50) / 100`, in i128 so no price can overflow.
    pub fn with_tax(&self, rate: TaxRate) -> Yen {
        let inclusive = (self.0 as i128 * rate.percent() as i128 + 50) / 100;
        Yen::from_yen(inclusive as i64)
    }

    /// Scales the amount to `percent` and drops any fraction of a yen.
    ///
    /// ## Example
    /// ```rust
    /// use zeikomi_core::money::Yen;
    ///
    /// let total = Yen::from_yen(540);
    /// assert_eq!(total.apply_percentage(90).amount(), 486);
    ///
    /// // 647 × 90% = 582.3 → 582
    /// assert_eq!(Yen::from_yen(647).apply_percentage(90).amount(), 582);
    /// ```
    pub fn apply_percentage(&self, percent: u32) -> Yen {
        let scaled = (self.0 as i128 * percent as i128).div_euclid(100);
        Yen::from_yen(scaled as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with a yen sign, e.g. `¥1,320`.
impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}¥{}", sign, grouped)
    }
}

impl Default for Yen {
    fn default() -> Self {
        Yen::zero()
    }
}

impl Add for Yen {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Yen(self.0 + other.0)
    }
}

impl AddAssign for Yen {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Yen {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Yen::zero(), |acc, yen| acc + yen)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
