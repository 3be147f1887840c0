//! # Cart Aggregator
//!
//! Composes the discount and tax calculators into a full cart breakdown.
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     calculate_total                                     │
//! │                                                                         │
//! │  items ──► single pass ──► subtotal          taxable_subtotal           │
//! │                                │                    │                   │
//! │                         apply_discount       apply_discount             │
//! │                                │                    │                   │
//! │                           discounted        taxable_discounted          │
//! │                                │                    │                   │
//! │                                │              calculate_tax             │
//! │                                │                    │                   │
//! │                                └───────► + ◄───── tax                   │
//! │                                          │                              │
//! │                                        total                            │
//! │                                                                         │
//! │  The SAME percentage is applied to both subtotals, separately.          │
//! │  Tax-exempt amounts never enter the tax base, before or after           │
//! │  discounting.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::discount::apply_discount;
use crate::error::PricingResult;
use crate::tax::calculate_tax;
use crate::types::{CartTotals, LineItem};

/// Computes the full monetary breakdown of a cart.
///
/// One pass over the items accumulates the subtotal and the taxable
/// subtotal. The discount percentage is then applied to each SEPARATELY:
/// discounting the blended subtotal and re-deriving a taxable share from
/// it would let exempt amounts shift the tax base. Tax applies to the
/// discounted taxable portion only, and the grand total is the discounted
/// subtotal plus tax.
///
/// An empty slice yields all-zero totals. A zero quantity contributes
/// nothing to either subtotal. Aggregation is exact: the loop performs
/// decimal addition only, so large carts lose no precision.
///
/// ## Errors
/// Invalid `discount_percent` or `tax_rate` values propagate unchanged
/// from [`apply_discount`] and [`calculate_tax`]; the aggregator does no
/// clamping of its own. Any error aborts the whole computation - there is
/// no partial result.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use tally_core::{calculate_total, LineItem};
///
/// let items = vec![
///     LineItem::new(dec!(25), 3),        // 75.00 taxable
///     LineItem::tax_exempt(dec!(3), 5),  // 15.00 exempt
/// ];
///
/// let totals = calculate_total(&items, dec!(10), dec!(8))?;
/// assert_eq!(totals.subtotal, dec!(90));
/// assert_eq!(totals.discount, dec!(9));
/// assert_eq!(totals.tax, dec!(5.40)); // 8% of 67.50, not of 81.00
/// assert_eq!(totals.total, dec!(86.40));
/// # Ok::<(), tally_core::PricingError>(())
/// ```
pub fn calculate_total(
    items: &[LineItem],
    discount_percent: Decimal,
    tax_rate: Decimal,
) -> PricingResult<CartTotals> {
    let mut subtotal = Decimal::ZERO;
    let mut taxable_subtotal = Decimal::ZERO;

    for item in items {
        let line_total = item.line_total();
        subtotal += line_total;
        if !item.is_tax_exempt {
            taxable_subtotal += line_total;
        }
    }

    let discounted = apply_discount(subtotal, discount_percent)?;
    let discount = subtotal - discounted;

    // Discount the taxable portion separately, with the same percentage.
    let taxable_discounted = apply_discount(taxable_subtotal, discount_percent)?;
    let tax = calculate_tax(taxable_discounted, tax_rate, false)?;

    let total = discounted + tax;

    Ok(CartTotals {
        subtotal,
        discount,
        tax,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
