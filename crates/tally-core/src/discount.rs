//! # Discount Calculator
//!
//! Reduces a price by a percentage. Leaf module: depends on nothing but
//! the error types.

use rust_decimal::Decimal;

use crate::error::{PricingError, PricingResult};

/// Applies a percentage discount to a price.
///
/// Returns `price * (1 - discount_percent / 100)` exactly. NO rounding
/// happens here: callers that need cent-level values round at their own
/// boundary, and the cart aggregator feeds this result onward at full
/// precision.
///
/// ## Errors
/// - [`PricingError::NegativePrice`] if `price < 0`
/// - [`PricingError::NegativeDiscount`] if `discount_percent < 0`
/// - [`PricingError::DiscountTooLarge`] if `discount_percent > 100`
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use tally_core::apply_discount;
///
/// let sale_price = apply_discount(dec!(100), dec!(10))?;
/// assert_eq!(sale_price, dec!(90));
/// # Ok::<(), tally_core::PricingError>(())
/// ```
pub fn apply_discount(price: Decimal, discount_percent: Decimal) -> PricingResult<Decimal> {
    if price < Decimal::ZERO {
        return Err(PricingError::NegativePrice);
    }
    if discount_percent < Decimal::ZERO {
        return Err(PricingError::NegativeDiscount);
    }
    if discount_percent > Decimal::ONE_HUNDRED {
        return Err(PricingError::DiscountTooLarge);
    }

    let multiplier = Decimal::ONE - discount_percent / Decimal::ONE_HUNDRED;
    Ok(price * multiplier)
}

// =============================================================================
// Unit Tests
// =============================================================================
