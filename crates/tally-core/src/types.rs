//! # Domain Types
//!
//! The two data transfer objects exchanged with callers.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐               │
//! │  │      LineItem       │          │     CartTotals      │               │
//! │  │  ─────────────────  │          │  ─────────────────  │               │
//! │  │  price (Decimal)    │  ──────► │  subtotal (Decimal) │               │
//! │  │  quantity (u32)     │  totals  │  discount (Decimal) │               │
//! │  │  is_tax_exempt      │          │  tax      (Decimal) │               │
//! │  └─────────────────────┘          │  total    (Decimal) │               │
//! │                                   └─────────────────────┘               │
//! │                                                                         │
//! │  LineItem is caller-owned input, never mutated by this crate.           │
//! │  CartTotals is a fresh value constructed per computation.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Decimal Money?
//! In floating point, `0.1 + 0.2 = 0.30000000000000004`. Every price,
//! percentage, and total in this crate is a [`rust_decimal::Decimal`]:
//! exact decimal arithmetic, no drift in the aggregation loop, and
//! rounding only where the tax rule explicitly asks for it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Line Item
// =============================================================================

/// One entry in a cart: unit price, quantity, and tax-exemption flag.
///
/// ## Design Notes
/// - `price`: the UNIT price, not the line total (`price * quantity` is
///   computed by [`line_total`](LineItem::line_total))
/// - `is_tax_exempt`: defaults to `false` on deserialization, so wire
///   payloads may omit it entirely
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use tally_core::LineItem;
///
/// let soda = LineItem::new(dec!(2.99), 3);
/// assert_eq!(soda.line_total(), dec!(8.97));
///
/// let stamps = LineItem::tax_exempt(dec!(0.68), 20);
/// assert!(stamps.is_tax_exempt);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unit price. Expected to be non-negative; the pricing functions
    /// reject negative aggregates.
    #[ts(as = "String")]
    pub price: Decimal,

    /// Quantity of this item. Zero is allowed and contributes nothing.
    pub quantity: u32,

    /// Whether this item is excluded from tax computation.
    #[serde(default)]
    pub is_tax_exempt: bool,
}

impl LineItem {
    /// Creates a taxable line item.
    pub fn new(price: Decimal, quantity: u32) -> Self {
        LineItem {
            price,
            quantity,
            is_tax_exempt: false,
        }
    }

    /// Creates a tax-exempt line item.
    pub fn tax_exempt(price: Decimal, quantity: u32) -> Self {
        LineItem {
            price,
            quantity,
            is_tax_exempt: true,
        }
    }

    /// Returns the line total (unit price × quantity), exact.
    #[inline]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// The full monetary breakdown of a cart.
///
/// ## Invariant
/// For every value produced by [`calculate_total`](crate::calculate_total):
/// `total == (subtotal - discount) + tax`.
///
/// A `CartTotals` is a plain value object: no identity, no lifecycle
/// beyond the single computation that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of `price * quantity` across all line items, before discount
    /// or tax.
    #[ts(as = "String")]
    pub subtotal: Decimal,

    /// Absolute currency amount subtracted from the subtotal.
    #[ts(as = "String")]
    pub discount: Decimal,

    /// Tax owed on the discounted taxable portion only.
    #[ts(as = "String")]
    pub tax: Decimal,

    /// Grand total: `(subtotal - discount) + tax`.
    #[ts(as = "String")]
    pub total: Decimal,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_total() {
        let item = LineItem::new(dec!(2.99), 3);
        assert_eq!(item.line_total(), dec!(8.97));
    }

    #[test]
    fn test_line_total_zero_quantity() {
        let item = LineItem::new(dec!(19.99), 0);
        assert_eq!(item.line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_constructors_set_exemption_flag() {
        assert!(!LineItem::new(dec!(1), 1).is_tax_exempt);
        assert!(LineItem::tax_exempt(dec!(1), 1).is_tax_exempt);
    }

    #[test]
    fn test_line_item_wire_shape() {
        let item = LineItem::tax_exempt(dec!(3.50), 2);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"price":"3.50","quantity":2,"isTaxExempt":true}"#
        );
    }

    /// `isTaxExempt` may be omitted on the wire and defaults to false.
    #[test]
    fn test_line_item_exemption_defaults_to_false() {
        let item: LineItem =
            serde_json::from_str(r#"{"price":"19.99","quantity":1}"#).unwrap();
        assert_eq!(item.price, dec!(19.99));
        assert_eq!(item.quantity, 1);
        assert!(!item.is_tax_exempt);
    }

    #[test]
    fn test_cart_totals_default_is_all_zero() {
        let totals = CartTotals::default();
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.discount, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_cart_totals_wire_shape() {
        let totals = CartTotals {
            subtotal: dec!(100),
            discount: dec!(10),
            tax: dec!(7.65),
            total: dec!(97.65),
        };
        let json = serde_json::to_string(&totals).unwrap();
        assert_eq!(
            json,
            r#"{"subtotal":"100","discount":"10","tax":"7.65","total":"97.65"}"#
        );
    }
}
